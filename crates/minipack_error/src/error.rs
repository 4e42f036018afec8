use std::{fmt::Display, path::Path};

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn contexts(&self) -> &[String] {
    &self.contexts
  }

  pub fn code(&self) -> &'static str {
    self.kind.code()
  }

  pub fn resource_unavailable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::ResourceUnavailable {
      path: path.as_ref().to_path_buf(),
      source,
    })
  }

  pub fn source_syntax_error(filename: impl AsRef<Path>, message: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::SourceSyntaxError {
      filename: filename.as_ref().to_path_buf(),
      message: message.into(),
    })
  }

  pub fn unresolved_import(importer: impl AsRef<Path>, specifier: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedImport {
      importer: importer.as_ref().to_path_buf(),
      specifier: specifier.into(),
    })
  }

  pub fn empty_bundle() -> Self {
    Self::with_kind(ErrorKind::EmptyBundle)
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::ResourceUnavailable { source, .. } => Some(source),
      ErrorKind::Panic { source } => Some(source.as_ref()),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
