use std::{
  path::{Path, PathBuf},
  str::FromStr,
};

use minipack::{BuildResult, Bundler, BundleOutput, InputOptions, ModuleSharing, OutputOptions};
use minipack_test_utils::{run_artifact, TestConfig};

pub struct CompiledFixture {
  pub config: TestConfig,
  pub output: BuildResult<BundleOutput>,
  pub fixture_path: PathBuf,
}

pub async fn compile_fixture(test_config_path: &Path) -> CompiledFixture {
  let fixture_path = test_config_path.parent().unwrap();

  let config = TestConfig::from_config_path(test_config_path);

  let mut bundler = Bundler::new(InputOptions {
    input: config.input.input.clone(),
    cwd: fixture_path.to_path_buf(),
    module_sharing: ModuleSharing::from_str(&config.input.module_sharing).unwrap(),
  });

  let output = bundler
    .generate(OutputOptions {
      banner: config.output.banner.clone(),
    })
    .await;

  CompiledFixture {
    config,
    output,
    fixture_path: fixture_path.to_path_buf(),
  }
}

fn assert_graph_is_consistent(output: &BundleOutput) {
  for (index, asset) in output.assets.iter().enumerate() {
    assert_eq!(asset.id.index(), index);
    assert!(
      asset.is_fully_mapped(),
      "{} has mapping {:?} for deps {:?}",
      asset.filename.display(),
      asset.mapping,
      asset.deps
    );
    assert!(asset
      .mapping
      .iter()
      .all(|(_, id)| id.index() < output.assets.len()));
  }
}

pub fn run_test(test_config_path: &Path) {
  // compile the fixture folder
  let compiled_fx = tokio::runtime::Runtime::new()
    .unwrap()
    .block_on(crate::common::compile_fixture(test_config_path));

  // If the test config has an expected error, assert that the error matches
  if let Some(expected_error) = compiled_fx.config.expected_error {
    let error = compiled_fx
      .output
      .expect_err("Expected error but got success");
    assert_eq!(error.kind.code(), expected_error.code);
    if let Some(message) = expected_error.message {
      assert_eq!(
        error.kind.to_readable_string(&compiled_fx.fixture_path),
        message
      );
    }
    return;
  }

  // Otherwise, run the bundle and compare what it prints
  let output = compiled_fx.output.unwrap();
  assert_graph_is_consistent(&output);

  let run = run_artifact(&output.code).unwrap();
  assert!(
    run.error.is_none(),
    "bundle threw {:?}\n{}",
    run.error,
    output.code
  );
  assert_eq!(run.logs, compiled_fx.config.expected_output);
}
