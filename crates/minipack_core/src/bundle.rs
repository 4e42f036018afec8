use std::fmt::Write;

use minipack_common::AssetId;
use rustc_hash::FxHashSet;

use crate::runtime::render_bootstrap;
use crate::{Asset, BuildError, BuildResult, OutputOptions};

/// Serializes an asset list into one self-executing script.
#[derive(Debug)]
pub struct Bundle<'a> {
  assets: &'a [Asset],
  output_options: &'a OutputOptions,
}

impl<'a> Bundle<'a> {
  pub fn new(assets: &'a [Asset], output_options: &'a OutputOptions) -> Self {
    Self {
      assets,
      output_options,
    }
  }

  #[tracing::instrument(skip_all)]
  pub fn generate(&self) -> BuildResult<String> {
    self.validate()?;

    let mut modules = String::new();
    for asset in self.assets {
      let mapping = serde_json::to_string(&asset.mapping).map_err(|e| {
        BuildError::from(minipack_error::anyhow::Error::from(e))
          .context(format!("Serialize mapping of {}", asset.filename.display()))
      })?;
      write!(
        modules,
        "{}: [function (require, module, exports) {{\n{}\n}}, {}],\n",
        asset.id, asset.code, mapping
      )
      .map_err(|e| BuildError::panic(e.to_string()))?;
    }
    tracing::debug!("rendered {} modules", self.assets.len());

    let mut output = String::new();
    if let Some(banner) = &self.output_options.banner {
      output.push_str(banner);
      output.push('\n');
    }
    output.push_str(&render_bootstrap(&modules)?);
    Ok(output)
  }

  /// A bundle that would fail to find one of its own modules at run time is
  /// rejected here instead.
  fn validate(&self) -> BuildResult<()> {
    let ids = self.assets.iter().map(|a| a.id).collect::<FxHashSet<_>>();
    if !ids.contains(&AssetId::ENTRY) {
      return Err(BuildError::empty_bundle());
    }

    for asset in self.assets {
      if let Some(dep) = asset.deps.iter().find(|dep| !asset.mapping.contains(dep)) {
        return Err(BuildError::unresolved_import(&asset.filename, dep.as_str()));
      }
      for (specifier, target) in asset.mapping.iter() {
        if !ids.contains(&target) || !asset.deps.iter().any(|dep| dep == specifier) {
          return Err(BuildError::unresolved_import(&asset.filename, specifier));
        }
      }
    }
    Ok(())
  }
}
