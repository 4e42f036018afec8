use std::path::PathBuf;

use tracing::instrument;

use crate::{BuildError, BuildResult, SharedTransformService, TransformOutput};

/// Reads one file and runs it through the transform service.
pub(crate) struct AssetTask {
  pub(crate) path: PathBuf,
  pub(crate) transformer: SharedTransformService,
}

#[derive(Debug)]
pub(crate) struct TaskResult {
  pub path: PathBuf,
  pub output: TransformOutput,
}

impl AssetTask {
  #[instrument(skip_all, fields(path = %self.path.display()))]
  pub(crate) async fn run(self) -> BuildResult<TaskResult> {
    let source = tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|e| BuildError::resource_unavailable(&self.path, e))?;

    let output = self.transformer.transform(&self.path, &source)?;
    tracing::trace!("transformed {} with {} deps", self.path.display(), output.deps.len());

    Ok(TaskResult {
      path: self.path,
      output,
    })
  }
}
