use std::path::{Path, PathBuf};

use futures::future::join_all;
use minipack_common::AssetId;
use rustc_hash::FxHashMap;

pub(crate) mod asset_task;

use asset_task::{AssetTask, TaskResult};

use crate::{
  Asset, BuildError, BuildResult, InputOptions, ModuleSharing, SharedResolver,
  SharedTransformService,
};

/// Walks the import graph breadth first, starting at the entry.
///
/// Ids come from a counter owned by the loader: an asset's id is the number of
/// assets discovered before it. Dependencies of one asset are loaded
/// concurrently, but ids are handed out afterwards in declaration order, so
/// the result never depends on which read finishes first.
pub(crate) struct ModuleLoader<'a> {
  input_options: &'a InputOptions,
  resolver: SharedResolver,
  transformer: SharedTransformService,
  assets: Vec<Asset>,
  /// Parent of each asset in the discovery tree, indexed by id.
  parents: Vec<Option<AssetId>>,
  id_by_path: FxHashMap<PathBuf, AssetId>,
}

/// Where one dependency of the asset being linked points to.
enum Target {
  Existing(AssetId),
  /// Index into the batch of files loaded for the current asset.
  Load(usize),
}

impl<'a> ModuleLoader<'a> {
  pub(crate) fn new(
    input_options: &'a InputOptions,
    resolver: SharedResolver,
    transformer: SharedTransformService,
  ) -> Self {
    Self {
      input_options,
      resolver,
      transformer,
      assets: Default::default(),
      parents: Default::default(),
      id_by_path: Default::default(),
    }
  }

  #[tracing::instrument(skip_all)]
  pub(crate) async fn fetch_all_assets(mut self) -> BuildResult<Vec<Asset>> {
    let entry = self.resolver.resolve_entry(&self.input_options.input);
    tracing::debug!("entry: {}", entry.display());

    let entry = AssetTask {
      path: entry,
      transformer: self.transformer.clone(),
    }
    .run()
    .await?;
    self.add_asset(entry, None);

    let mut next = 0;
    while next < self.assets.len() {
      self.link_dependencies(AssetId::new(next)).await?;
      next += 1;
    }

    tracing::debug!("discovered {} assets", self.assets.len());
    Ok(self.assets)
  }

  async fn link_dependencies(&mut self, importer: AssetId) -> BuildResult<()> {
    let (filename, deps) = {
      let asset = &self.assets[importer.index()];
      (asset.filename.clone(), asset.deps.clone())
    };

    let mut batch: Vec<PathBuf> = vec![];
    let mut slot_by_path: FxHashMap<PathBuf, usize> = Default::default();
    let mut targets = Vec::with_capacity(deps.len());

    for specifier in &deps {
      let path = self
        .resolver
        .resolve(&filename, specifier)
        .map_err(|e| e.context(format!("Resolve \"{specifier}\" from {}", filename.display())))?;

      let target = if let Some(id) = self.reusable_asset(importer, &path) {
        Target::Existing(id)
      } else if let (ModuleSharing::PerPath, Some(slot)) =
        (self.input_options.module_sharing, slot_by_path.get(&path))
      {
        Target::Load(*slot)
      } else {
        slot_by_path.insert(path.clone(), batch.len());
        batch.push(path);
        Target::Load(batch.len() - 1)
      };
      targets.push(target);
    }

    let loaded = self.load_batch(batch).await?;
    let loaded_ids = loaded
      .into_iter()
      .map(|result| self.add_asset(result, Some(importer)))
      .collect::<Vec<_>>();

    let mapping = &mut self.assets[importer.index()].mapping;
    for (specifier, target) in deps.into_iter().zip(targets) {
      let id = match target {
        Target::Existing(id) => id,
        Target::Load(slot) => loaded_ids[slot],
      };
      tracing::trace!("{importer}: \"{specifier}\" -> {id}");
      mapping.insert(specifier, id);
    }

    Ok(())
  }

  async fn load_batch(&self, paths: Vec<PathBuf>) -> BuildResult<Vec<TaskResult>> {
    let handles = paths.into_iter().map(|path| {
      tokio::spawn(
        AssetTask {
          path,
          transformer: self.transformer.clone(),
        }
        .run(),
      )
    });

    join_all(handles)
      .await
      .into_iter()
      .map(|joined| match joined {
        Ok(result) => result,
        Err(err) => Err(BuildError::panic(format!("Asset task failed: {err}"))),
      })
      .collect()
  }

  /// An already discovered asset that an import of `path` from `importer` should
  /// point to instead of loading the file again.
  fn reusable_asset(&self, importer: AssetId, path: &Path) -> Option<AssetId> {
    match self.input_options.module_sharing {
      ModuleSharing::PerPath => self.id_by_path.get(path).copied(),
      ModuleSharing::PerImport => self
        .ancestors(importer)
        .find(|id| self.assets[id.index()].filename == path),
    }
  }

  /// `id` itself, then its parent, up to the entry.
  fn ancestors(&self, id: AssetId) -> impl Iterator<Item = AssetId> + '_ {
    std::iter::successors(Some(id), |id| self.parents[id.index()])
  }

  fn add_asset(&mut self, result: TaskResult, parent: Option<AssetId>) -> AssetId {
    let id = AssetId::new(self.assets.len());
    tracing::trace!("asset {id}: {}", result.path.display());
    self.id_by_path.entry(result.path.clone()).or_insert(id);
    self.parents.push(parent);
    self.assets.push(Asset::new(
      id,
      result.path,
      result.output.deps,
      result.output.code,
    ));
    id
  }
}
