use std::path::PathBuf;

use minipack_core::{BundlerCore, InputOptions, OutputOptions};

#[tokio::main]
async fn main() {
  let root = PathBuf::from(&std::env::var("CARGO_MANIFEST_DIR").unwrap());
  let fixture_path = root.join("../minipack/tests/fixtures/basic");

  let mut bundler = BundlerCore::new(InputOptions {
    input: "./main.js".to_string(),
    cwd: fixture_path,
    ..Default::default()
  });

  let output = bundler.build(&OutputOptions::default()).await.unwrap();

  for asset in &output.assets {
    println!("{} {} {:?}", asset.id, asset.filename.display(), asset.mapping);
  }
  println!("{}", output.code)
}
