use std::sync::atomic::AtomicBool;

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Installs the global subscriber once, and only if `MINIPACK_TRACING` is set.
pub fn enable_tracing_on_demand() {
  if std::env::var("MINIPACK_TRACING").is_ok() {
    init();
  }
}

pub fn init() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, std::sync::atomic::Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(EnvFilter::from_env("MINIPACK_TRACING"))
      .with(
        tracing_subscriber::filter::Targets::new().with_targets(vec![("minipack", Level::TRACE)]),
      )
      .init();
  }
}
