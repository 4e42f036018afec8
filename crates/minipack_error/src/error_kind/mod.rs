use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use crate::utils::PathExt;
use crate::CWD;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  /// A source or dependency path could not be read.
  ResourceUnavailable {
    path: PathBuf,
    source: std::io::Error,
  },
  /// The transform service could not parse a file.
  SourceSyntaxError {
    filename: PathBuf,
    message: String,
  },
  /// A module asks for a specifier its mapping has no entry for.
  UnresolvedImport {
    importer: PathBuf,
    specifier: String,
  },
  EmptyBundle,

  /// Unrecoverable internal error.
  ///
  /// We also use this to replace `panic!()` in the code for graceful shutdown.
  Panic {
    source: anyhow::Error,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::ResourceUnavailable { path, source } => write!(
        f,
        "Could not read \"{}\": {source}",
        path.may_display_relative()
      ),
      ErrorKind::SourceSyntaxError { filename, message } => write!(
        f,
        "Parse failed: \"{}\": {message}",
        filename.may_display_relative()
      ),
      ErrorKind::UnresolvedImport { importer, specifier } => write!(
        f,
        "Could not resolve \"{specifier}\" from \"{}\".",
        importer.may_display_relative()
      ),
      ErrorKind::EmptyBundle => write!(f, "Cannot emit a bundle without an entry asset."),
      ErrorKind::Panic { source } => source.fmt(f),
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by make them relative to CWD.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::ResourceUnavailable { .. } => error_code::RESOURCE_UNAVAILABLE,
      ErrorKind::SourceSyntaxError { .. } => error_code::SOURCE_SYNTAX_ERROR,
      ErrorKind::UnresolvedImport { .. } => error_code::UNRESOLVED_IMPORT,
      ErrorKind::EmptyBundle => error_code::EMPTY_BUNDLE,
      ErrorKind::Panic { .. } => error_code::PANIC,
    }
  }
}
