//! Tracing/logging setup shared by every binary in the workspace.

/// Initialize process-wide tracing.
///
/// Reads `RUST_LOG` (filter) and `FILMCAT_LOG_FORMAT` (`json` or `pretty`).
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(log_format(std::env::var("FILMCAT_LOG_FORMAT").ok()));
}

/// Resolve the `FILMCAT_LOG_FORMAT` value; unset or unknown means JSON.
fn log_format(raw: Option<String>) -> LogFormat {
    raw.and_then(|raw| raw.parse().ok()).unwrap_or_default()
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
