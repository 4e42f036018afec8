use std::sync::Arc;

use minipack_common::AssetId;
use minipack_resolver::Resolver;

use crate::module_loader::ModuleLoader;
use crate::{Asset, BuildResult, InputOptions, SharedTransformService};

/// Every asset reachable from the entry, indexed by id.
#[derive(Debug, Default)]
pub struct AssetGraph {
  assets: Vec<Asset>,
}

impl AssetGraph {
  /// Discovers, transforms and links every file reachable from
  /// `input_options.input`. Fails on the first unreadable or unparsable file.
  #[tracing::instrument(skip_all)]
  pub async fn build(
    input_options: &InputOptions,
    transformer: SharedTransformService,
  ) -> BuildResult<Self> {
    let resolver = Arc::new(Resolver::with_cwd(input_options.cwd.clone()));
    let assets = ModuleLoader::new(input_options, resolver, transformer)
      .fetch_all_assets()
      .await?;
    debug_assert!(assets
      .iter()
      .enumerate()
      .all(|(index, asset)| asset.id.index() == index));
    Ok(Self { assets })
  }

  pub fn entry(&self) -> Option<&Asset> {
    self.assets.first()
  }

  pub fn get(&self, id: AssetId) -> Option<&Asset> {
    self.assets.get(id.index())
  }

  pub fn assets(&self) -> &[Asset] {
    &self.assets
  }

  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }

  pub fn into_assets(self) -> Vec<Asset> {
    self.assets
  }
}
