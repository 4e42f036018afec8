use std::path::Path;

use serde::Deserialize;

mod input_options;
mod output_options;
pub use input_options::InputOptions;
pub use output_options::OutputOptions;

use crate::impl_serde_default;

/// Contents of a fixture's `test.config.json`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestConfig {
  #[serde(default)]
  pub input: InputOptions,

  #[serde(default)]
  pub output: OutputOptions,

  /// Lines the bundle is expected to print, in order.
  #[serde(default)]
  pub expected_output: Vec<String>,

  #[serde(default)]
  pub expected_error: Option<ExpectedError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpectedError {
  pub code: String,
  /// Compared against the message with paths relative to the fixture. Left
  /// out when the wording comes from the parser.
  #[serde(default)]
  pub message: Option<String>,
}

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    let content = std::fs::read_to_string(filepath).unwrap_or_else(|_| "{}".to_string());
    serde_json::from_str(&content)
      .unwrap_or_else(|e| panic!("Invalid test config {}: {e}", filepath.display()))
  }
}

impl_serde_default!(TestConfig);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let config = TestConfig::default();
    assert_eq!(config.input.input, "./main.js");
    assert_eq!(config.input.module_sharing, "perImport");
    assert!(config.output.banner.is_none());
    assert!(config.expected_output.is_empty());
    assert!(config.expected_error.is_none());
  }

  #[test]
  fn reads_camel_case_fields() {
    let config: TestConfig = serde_json::from_str(
      r#"{
        "input": { "input": "./src/index.ts", "moduleSharing": "perPath" },
        "output": { "banner": "/* hi */" },
        "expectedOutput": ["42"],
        "expectedError": { "code": "EMPTY_BUNDLE", "message": "nope" }
      }"#,
    )
    .unwrap();
    assert_eq!(config.input.input, "./src/index.ts");
    assert_eq!(config.input.module_sharing, "perPath");
    assert_eq!(config.output.banner.as_deref(), Some("/* hi */"));
    assert_eq!(config.expected_output, vec!["42"]);
    assert_eq!(config.expected_error.unwrap().code, "EMPTY_BUNDLE");
  }

  #[test]
  #[should_panic]
  fn unknown_fields_are_rejected() {
    let _: TestConfig = serde_json::from_str(r#"{ "treeshake": false }"#).unwrap();
  }
}
