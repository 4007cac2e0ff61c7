//! Logging bootstrap for the CLI session.
//!
//! Diagnostics go to stderr so they never interleave with the menu on
//! stdout. Initialization is guarded so repeated [`crate::run`] calls (as in
//! tests) stay no-ops after the first.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initializes stderr logging once per process.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
///
/// # Errors
///
/// Returns a human-readable error string when the log specification is
/// invalid or the logger backend fails to start.
pub fn init() -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_env_or_str("info")
                .map_err(|err| format!("invalid log specification: {err}"))?
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}
