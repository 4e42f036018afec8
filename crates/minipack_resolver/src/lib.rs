use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

/// Joins import specifiers onto the importing file's directory.
///
/// There is no extension inference and no package lookup: `./a` stays `./a`.
#[derive(Debug)]
pub struct Resolver {
  cwd: PathBuf,
}

impl Resolver {
  pub fn with_cwd(cwd: PathBuf) -> Self {
    Self { cwd }
  }

  /// Entries are resolved against the cwd.
  pub fn resolve_entry(&self, specifier: &str) -> PathBuf {
    self.cwd.join(specifier).normalize()
  }

  pub fn resolve(&self, importer: &Path, specifier: &str) -> minipack_error::Result<PathBuf> {
    let dir = importer.parent().ok_or_else(|| {
      minipack_error::format_err!(
        "Importer \"{}\" has no parent directory",
        importer.display()
      )
    })?;
    Ok(dir.join(specifier).normalize())
  }
}
