use std::{path::PathBuf, str::FromStr};

use crate::BuildError;

/// How repeated imports of the same file are turned into assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleSharing {
  /// Every import creates its own asset, even if the path was already
  /// processed for another importer. A diamond-shaped graph therefore
  /// evaluates the shared module once per importer.
  ///
  /// Importing a file that is an ancestor of the importer in the discovery
  /// tree reuses the ancestor's id, so cycles still terminate.
  #[default]
  PerImport,
  /// Every distinct path becomes exactly one asset.
  PerPath,
}

impl FromStr for ModuleSharing {
  type Err = BuildError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "perImport" => Ok(Self::PerImport),
      "perPath" => Ok(Self::PerPath),
      _ => Err(BuildError::panic(format!(
        "Unknown module sharing value \"{s}\", expected \"perImport\" or \"perPath\""
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct InputOptions {
  /// Entry file, resolved against `cwd`.
  pub input: String,
  pub cwd: PathBuf,
  pub module_sharing: ModuleSharing,
}

impl Default for InputOptions {
  fn default() -> Self {
    Self {
      input: "./src/index.js".to_string(),
      cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
      module_sharing: Default::default(),
    }
  }
}
