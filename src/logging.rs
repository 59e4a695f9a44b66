//! Logging setup.
//!
//! All diagnostics go to stderr through `tracing`, so stdout carries only the
//! report. `RUST_LOG` overrides the level chosen from the CLI flags.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool, debug: bool) {
    let level = default_level(verbose, debug);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
