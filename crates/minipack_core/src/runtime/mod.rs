use crate::{BuildError, BuildResult};

const LOADER: &str = include_str!("./loader.js");
const MODULES_PLACEHOLDER: &str = "/* __MINIPACK_MODULES__ */";

/// Wraps a rendered module table in the loader bootstrap.
pub(crate) fn render_bootstrap(modules: &str) -> BuildResult<String> {
  let (head, tail) = LOADER
    .split_once(MODULES_PLACEHOLDER)
    .ok_or_else(|| BuildError::panic("Loader template lost its module placeholder".to_string()))?;
  let mut output = String::with_capacity(head.len() + modules.len() + tail.len());
  output.push_str(head);
  output.push_str(modules);
  output.push_str(tail);
  Ok(output)
}
