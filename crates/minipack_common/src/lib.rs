use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod loader;
pub use loader::*;

/// Index of an asset inside one build. Ids are handed out in discovery order,
/// starting from `0` for the entry.
#[derive(
  Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(usize);

impl AssetId {
  pub const ENTRY: AssetId = AssetId(0);

  pub fn new(value: usize) -> Self {
    Self(value)
  }

  pub fn index(&self) -> usize {
    self.0
  }
}

impl Display for AssetId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Raw import specifier, as written in source, to the id of the asset it was
/// resolved to.
///
/// Keys keep the order in which they were first inserted, so the serialized
/// form is stable across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepMapping(IndexMap<String, AssetId>);

impl DepMapping {
  pub fn new() -> Self {
    Self::default()
  }

  /// Re-inserting a specifier overwrites its target but keeps its position.
  pub fn insert(&mut self, specifier: impl Into<String>, id: AssetId) -> Option<AssetId> {
    self.0.insert(specifier.into(), id)
  }

  pub fn get(&self, specifier: &str) -> Option<AssetId> {
    self.0.get(specifier).copied()
  }

  pub fn contains(&self, specifier: &str) -> bool {
    self.0.contains_key(specifier)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, AssetId)> {
    self.0.iter().map(|(k, v)| (k.as_str(), *v))
  }

  pub fn specifiers(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }
}

impl FromIterator<(String, AssetId)> for DepMapping {
  fn from_iter<T: IntoIterator<Item = (String, AssetId)>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}
