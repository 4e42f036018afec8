#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
  /// Text placed verbatim above the bundle.
  pub banner: Option<String>,
}
