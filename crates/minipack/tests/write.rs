use minipack::{Bundler, EsVersion, InputOptions, ModuleSharing, OutputOptions, SwcTransformer};
use minipack_error::error_code;
use minipack_test_utils::run_artifact;

fn project(files: &[(&str, &str)]) -> tempfile::TempDir {
  let dir = tempfile::tempdir().unwrap();
  for (name, content) in files {
    std::fs::write(dir.path().join(name), content).unwrap();
  }
  dir
}

#[tokio::test]
async fn write_creates_missing_directories() {
  let dir = project(&[
    ("main.js", "import { x } from './a.js';\nconsole.log(x * 2);\n"),
    ("a.js", "export const x = 21;\n"),
  ]);
  let mut bundler = Bundler::new(InputOptions {
    input: "./main.js".to_string(),
    cwd: dir.path().to_path_buf(),
    module_sharing: ModuleSharing::PerImport,
  });

  let output = bundler
    .write(OutputOptions::default(), "dist/nested/bundle.js")
    .await
    .unwrap();

  let written = std::fs::read_to_string(dir.path().join("dist/nested/bundle.js")).unwrap();
  assert_eq!(written, output.code);
  assert_eq!(output.assets.len(), 2);
  assert_eq!(run_artifact(&written).unwrap().logs, vec!["42"]);
}

#[tokio::test]
async fn failed_build_writes_nothing() {
  let dir = project(&[("main.js", "import './gone.js';\n")]);
  let mut bundler = Bundler::new(InputOptions {
    input: "./main.js".to_string(),
    cwd: dir.path().to_path_buf(),
    ..Default::default()
  });

  let err = bundler
    .write(OutputOptions::default(), "dist/bundle.js")
    .await
    .unwrap_err();

  assert_eq!(err.code(), error_code::RESOURCE_UNAVAILABLE);
  assert!(!dir.path().join("dist").exists());
}

#[tokio::test]
async fn custom_transformer_replaces_swc() {
  let dir = project(&[("entry.txt", "hello from a text file")]);
  let mut bundler = Bundler::with_transformer(
    InputOptions {
      input: "./entry.txt".to_string(),
      cwd: dir.path().to_path_buf(),
      ..Default::default()
    },
    |_: &std::path::Path, source: &str| -> minipack::BuildResult<minipack::TransformOutput> {
      Ok(minipack::TransformOutput {
        deps: vec![],
        code: format!("console.log({:?});", source),
      })
    },
  );

  let output = bundler.generate(OutputOptions::default()).await.unwrap();
  assert_eq!(
    run_artifact(&output.code).unwrap().logs,
    vec!["hello from a text file"]
  );
}

#[tokio::test]
async fn transformer_target_is_respected() {
  let dir = project(&[("main.js", "const twice = (x) => x * 2;\nconsole.log(twice(21));\n")]);
  let mut bundler = Bundler::with_transformer(
    InputOptions {
      input: "./main.js".to_string(),
      cwd: dir.path().to_path_buf(),
      ..Default::default()
    },
    SwcTransformer::with_target(EsVersion::Es2015),
  );

  let output = bundler.generate(OutputOptions::default()).await.unwrap();
  assert!(output.code.contains("=>"));
  assert_eq!(run_artifact(&output.code).unwrap().logs, vec!["42"]);
}
