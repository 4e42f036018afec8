use anyhow::Context as _;
use rquickjs::{Context, Runtime};
use serde::Deserialize;

/// What happened when a bundle was evaluated in a fresh QuickJS context.
#[derive(Debug, Deserialize)]
pub struct ArtifactRun {
  /// Every `console.log` call, arguments joined by a space.
  pub logs: Vec<String>,
  /// Set when evaluating the bundle threw.
  pub error: Option<RuntimeError>,
  /// `module.exports` of the entry, if it survives `JSON.stringify`.
  pub exports: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct RuntimeError {
  pub code: Option<String>,
  pub message: String,
}

const HARNESS: &str = r#"
(function (source) {
  var logs = [];
  var format = function (value) {
    if (typeof value === "string") return value;
    if (typeof value === "object" && value !== null) {
      try {
        return JSON.stringify(value);
      } catch (_) {}
    }
    return String(value);
  };
  var log = function () {
    logs.push(Array.prototype.map.call(arguments, format).join(" "));
  };
  globalThis.console = { log: log, info: log, warn: log, error: log };

  var error = null;
  var exports;
  try {
    exports = (0, eval)(source);
  } catch (e) {
    error = {
      code: e && typeof e.code === "string" ? e.code : null,
      message: e && e.message !== undefined ? String(e.message) : String(e),
    };
  }

  var serialized = null;
  try {
    serialized = exports === undefined ? null : JSON.parse(JSON.stringify(exports));
  } catch (_) {}

  return JSON.stringify({ logs: logs, error: error, exports: serialized === undefined ? null : serialized });
})
"#;

/// Evaluates `code` with a minimal `console` and reports what it printed.
///
/// Errors thrown by the bundle are captured in [`ArtifactRun::error`], the
/// `Err` case is reserved for problems with the engine itself.
pub fn run_artifact(code: &str) -> anyhow::Result<ArtifactRun> {
  let script = format!("{HARNESS}({})", serde_json::to_string(code)?);
  let runtime = Runtime::new().map_err(|e| anyhow::format_err!("{e}"))?;
  let context = Context::full(&runtime).map_err(|e| anyhow::format_err!("{e}"))?;
  let report = context
    .with(|ctx| ctx.eval::<String, _>(script))
    .map_err(|e| anyhow::format_err!("{e}"))?;
  serde_json::from_str(&report).context("Malformed report from the QuickJS harness")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn captures_console_output() {
    let run = run_artifact("console.log('a', 1, { b: true }); console.log(null);").unwrap();
    assert_eq!(run.logs, vec!["a 1 {\"b\":true}", "null"]);
    assert!(run.error.is_none());
  }

  #[test]
  fn captures_thrown_errors() {
    let run =
      run_artifact("var e = new Error('boom'); e.code = 'SOME_CODE'; throw e;").unwrap();
    let error = run.error.unwrap();
    assert_eq!(error.code.as_deref(), Some("SOME_CODE"));
    assert_eq!(error.message, "boom");
  }

  #[test]
  fn returns_the_completion_value() {
    let run = run_artifact("(function () { return { x: [1, 2] }; })()").unwrap();
    assert_eq!(run.exports, Some(serde_json::json!({ "x": [1, 2] })));
  }

  #[test]
  fn runs_are_isolated() {
    run_artifact("globalThis.leak = 1;").unwrap();
    let run = run_artifact("console.log(typeof leak);").unwrap();
    assert_eq!(run.logs, vec!["undefined"]);
  }
}
