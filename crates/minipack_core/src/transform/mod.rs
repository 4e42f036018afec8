use std::{path::Path, sync::Arc};

use crate::BuildResult;

mod swc_transformer;
pub use swc_transformer::*;

/// What the graph builder needs to know about one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutput {
  /// Every static import specifier, in source order, exactly as written.
  pub deps: Vec<String>,
  /// Executable body for `function (require, module, exports) { ... }`.
  pub code: String,
}

/// Parses a source file, lists its static imports and lowers it into a
/// CommonJS-shaped function body.
///
/// Implementations must be pure functions of their input: the same source
/// always yields the same output, and a failed transform yields no output.
pub trait TransformService: Send + Sync {
  /// `filename` is only used to pick a dialect and to report errors.
  fn transform(&self, filename: &Path, source: &str) -> BuildResult<TransformOutput>;
}

pub type SharedTransformService = Arc<dyn TransformService>;

impl<F> TransformService for F
where
  F: Fn(&Path, &str) -> BuildResult<TransformOutput> + Send + Sync,
{
  fn transform(&self, filename: &Path, source: &str) -> BuildResult<TransformOutput> {
    self(filename, source)
  }
}
