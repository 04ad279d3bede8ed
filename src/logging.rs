//! Tracing subscriber setup for the command-line tools.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `ROADMAP_LOG=roadmap::graph=debug`.
pub const LOG_ENV: &str = "ROADMAP_LOG";

/// Installs a stderr formatter filtered by `ROADMAP_LOG`, defaulting to `info`.
///
/// `verbose` forces `debug` regardless of the environment.
/// Only the first call has any effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
