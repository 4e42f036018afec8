use serde::Deserialize;

use crate::impl_serde_default;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
  #[serde(default)]
  pub banner: Option<String>,
}

impl_serde_default!(OutputOptions);
