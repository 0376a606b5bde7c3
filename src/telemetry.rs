//! Diagnostic logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter (e.g. `NUMTEXT_LOG=debug`)
pub const LOG_ENV: &str = "NUMTEXT_LOG";

/// Install the global `tracing` subscriber writing to stderr.
///
/// The filter comes from `NUMTEXT_LOG`, defaulting to `warn`, or `debug` when
/// `verbose` is set. Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
