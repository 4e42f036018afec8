use std::path::{Path, PathBuf};

use minipack_core::{
  AssetGraph, BuildResult, InputOptions, ModuleSharing, TransformOutput, TransformService,
};

/// Treats every `dep <specifier>` line as an import and keeps the source as is.
pub fn line_deps(_filename: &Path, source: &str) -> BuildResult<TransformOutput> {
  Ok(TransformOutput {
    deps: source
      .lines()
      .filter_map(|line| line.strip_prefix("dep "))
      .map(|dep| dep.trim().to_string())
      .collect(),
    code: source.to_string(),
  })
}

pub struct Project {
  dir: tempfile::TempDir,
}

impl Project {
  pub fn new(files: &[(&str, &str)]) -> Self {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
      let path = dir.path().join(name);
      std::fs::create_dir_all(path.parent().unwrap()).unwrap();
      std::fs::write(path, content).unwrap();
    }
    Self { dir }
  }

  pub fn path(&self, name: &str) -> PathBuf {
    self.dir.path().join(name)
  }

  pub fn input_options(&self, input: &str, module_sharing: ModuleSharing) -> InputOptions {
    InputOptions {
      input: input.to_string(),
      cwd: self.dir.path().to_path_buf(),
      module_sharing,
    }
  }

  pub async fn build(
    &self,
    input: &str,
    module_sharing: ModuleSharing,
    transformer: impl TransformService + 'static,
  ) -> BuildResult<AssetGraph> {
    AssetGraph::build(
      &self.input_options(input, module_sharing),
      std::sync::Arc::new(transformer),
    )
    .await
  }
}
