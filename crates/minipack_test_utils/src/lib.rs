mod quickjs;
pub mod test_config;

pub use quickjs::{run_artifact, ArtifactRun, RuntimeError};
pub use test_config::TestConfig;

#[macro_export]
macro_rules! impl_serde_default {
  ($name:ident) => {
    impl Default for $name {
      fn default() -> Self {
        serde_json::from_str("{}").unwrap()
      }
    }
  };
}
