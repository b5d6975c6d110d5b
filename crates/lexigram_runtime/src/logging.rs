//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LEXIGRAM_LOG=debug`.
pub const LOG_ENV: &str = "LEXIGRAM_LOG";

/// Installs a stderr `tracing` subscriber filtered by [`LOG_ENV`].
///
/// Defaults to `warn` when the variable is unset or invalid. Calling this
/// more than once is harmless; only the first subscriber is installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
