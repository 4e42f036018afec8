use serde::Deserialize;

use crate::impl_serde_default;

fn input_default() -> String {
  "./main.js".to_string()
}

fn per_import_by_default() -> String {
  "perImport".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InputOptions {
  #[serde(default = "input_default")]
  pub input: String,

  #[serde(default = "per_import_by_default")]
  pub module_sharing: String,
}

impl_serde_default!(InputOptions);
