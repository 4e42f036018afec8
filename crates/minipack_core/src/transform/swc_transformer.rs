use std::path::Path;

use minipack_common::Loader;
use minipack_compiler::Compiler;
use minipack_swc_visitors::{collect_imports, resolve, to_cjs, ts_to_js};
use swc_core::common::{comments::SingleThreadedComments, Globals, GLOBALS};
use swc_core::ecma::{
  ast::EsVersion,
  parser::{EsConfig, Syntax, TsConfig},
};

use crate::{BuildError, BuildResult, TransformOutput, TransformService};

/// The default [TransformService], built on swc.
///
/// The dialect is picked from the file extension. Scripts are parsed as ES
/// modules, TypeScript is stripped, syntax newer than `target` is lowered and
/// the result is converted to CommonJS. JSON files become
/// `module.exports = <json>;`.
#[derive(Debug, Clone, Copy)]
pub struct SwcTransformer {
  target: EsVersion,
}

impl Default for SwcTransformer {
  fn default() -> Self {
    Self {
      target: EsVersion::Es5,
    }
  }
}

impl SwcTransformer {
  /// Targets ES5.
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_target(target: EsVersion) -> Self {
    Self { target }
  }
}

impl TransformService for SwcTransformer {
  #[tracing::instrument(level = "trace", skip(self, source))]
  fn transform(&self, filename: &Path, source: &str) -> BuildResult<TransformOutput> {
    let loader = Loader::from_path(filename);
    match loader {
      Loader::Json => transform_json(filename, source),
      Loader::Js | Loader::Jsx | Loader::Ts | Loader::Tsx => {
        transform_script(filename, source, loader, self.target)
      }
    }
  }
}

fn syntax_by_loader(loader: Loader) -> Syntax {
  if loader.is_typescript() {
    Syntax::Typescript(TsConfig {
      tsx: loader.is_jsx(),
      decorators: true,
      ..Default::default()
    })
  } else {
    Syntax::Es(EsConfig {
      jsx: loader.is_jsx(),
      ..Default::default()
    })
  }
}

fn transform_script(
  filename: &Path,
  source: &str,
  loader: Loader,
  target: EsVersion,
) -> BuildResult<TransformOutput> {
  let compiler = Compiler::default();
  let comments = SingleThreadedComments::default();
  let fm = compiler.create_source_file(filename.to_path_buf(), source.to_string());
  let ast = compiler.parse_with_comments(&fm, syntax_by_loader(loader), Some(&comments))?;

  let (deps, ast) = GLOBALS.set(&Globals::new(), || {
    let (mut ast, marks) = resolve(ast, loader.is_typescript());
    if loader.is_typescript() {
      ast = ts_to_js(ast, marks);
    }
    // Collected after stripping so imports that only carried types are gone.
    let deps = collect_imports(&ast);
    (deps, to_cjs(ast, &comments, marks, target))
  });
  let code = compiler.print(&ast, Some(&comments))?;

  Ok(TransformOutput { deps, code })
}

fn transform_json(filename: &Path, source: &str) -> BuildResult<TransformOutput> {
  serde_json::from_str::<serde_json::Value>(source)
    .map_err(|err| BuildError::source_syntax_error(filename, err.to_string()))?;
  Ok(TransformOutput {
    deps: vec![],
    code: format!("module.exports = {};", source.trim()),
  })
}
