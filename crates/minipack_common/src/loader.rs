use std::{path::Path, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
  Js,
  Jsx,
  Ts,
  Tsx,
  Json,
}

impl Loader {
  /// Unknown or missing extensions are treated as JavaScript.
  pub fn from_path(p: &Path) -> Self {
    p.extension()
      .and_then(|ext| ext.to_str())
      .map(Loader::from_str)
      .and_then(Result::ok)
      .unwrap_or(Loader::Js)
  }

  pub fn is_typescript(&self) -> bool {
    matches!(self, Self::Ts | Self::Tsx)
  }

  pub fn is_jsx(&self) -> bool {
    matches!(self, Self::Jsx | Self::Tsx)
  }
}

impl FromStr for Loader {
  type Err = minipack_error::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "js" | "mjs" | "cjs" => Ok(Self::Js),
      "jsx" => Ok(Self::Jsx),
      "ts" | "mts" | "cts" => Ok(Self::Ts),
      "tsx" => Ok(Self::Tsx),
      "json" => Ok(Self::Json),
      _ => Err(minipack_error::Error::panic(format!(
        "Unknown loader value \"{}\"",
        s
      ))),
    }
  }
}
