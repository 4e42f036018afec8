use std::path::PathBuf;

use minipack_common::{AssetId, DepMapping};

/// One processed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
  pub id: AssetId,
  /// Absolute, normalized path. Only used while building the graph, it never
  /// reaches the emitted bundle.
  pub filename: PathBuf,
  /// Import specifiers exactly as written, in source order. May repeat.
  pub deps: Vec<String>,
  /// Body of a `function (require, module, exports)`.
  pub code: String,
  pub mapping: DepMapping,
}

impl Asset {
  pub(crate) fn new(id: AssetId, filename: PathBuf, deps: Vec<String>, code: String) -> Self {
    Self {
      id,
      filename,
      deps,
      code,
      mapping: Default::default(),
    }
  }

  /// Whether `mapping` covers every dependency and nothing else.
  pub fn is_fully_mapped(&self) -> bool {
    self.deps.iter().all(|dep| self.mapping.contains(dep))
      && self
        .mapping
        .specifiers()
        .all(|specifier| self.deps.iter().any(|dep| dep == specifier))
  }
}
