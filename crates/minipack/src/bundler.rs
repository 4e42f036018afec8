use std::path::Path;

use minipack_core::{BuildResult, BundleOutput, BundlerCore, TransformService};
use minipack_error::anyhow::Context;

use crate::{InputOptions, OutputOptions};

pub struct Bundler {
  core: BundlerCore,
}

impl Bundler {
  pub fn new(input_opts: InputOptions) -> Self {
    Self {
      core: BundlerCore::new(input_opts),
    }
  }

  /// Uses `transformer` instead of the built-in swc pipeline.
  pub fn with_transformer(
    input_opts: InputOptions,
    transformer: impl TransformService + 'static,
  ) -> Self {
    Self {
      core: BundlerCore::with_transformer(input_opts, transformer),
    }
  }

  /// Builds the bundle and writes it to `file`, resolved against `cwd`.
  /// Nothing is written when the build fails.
  pub async fn write(
    &mut self,
    output_options: OutputOptions,
    file: impl AsRef<Path>,
  ) -> BuildResult<BundleOutput> {
    let output = self.core.build(&output_options).await?;

    let cwd = &self.core.input_options().cwd;
    let dest = cwd.join(file.as_ref());
    if let Some(p) = dest.parent() {
      if !p.exists() {
        std::fs::create_dir_all(p).with_context(|| {
          format!(
            "Could not create directory for the bundle: {:?} \ncwd: {}",
            p,
            cwd.display()
          )
        })?;
      }
    };
    std::fs::write(&dest, &output.code)
      .with_context(|| format!("Failed to write bundle to {:?}", dest))?;
    tracing::debug!("wrote {} bytes to {:?}", output.code.len(), dest);

    Ok(output)
  }

  pub async fn generate(&mut self, output_options: OutputOptions) -> BuildResult<BundleOutput> {
    self.core.build(&output_options).await
  }
}
