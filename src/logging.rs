//! Diagnostic logging
//!
//! `tracing` events go to stderr; user-facing output stays on stdout. The
//! level comes from the `-v` count unless `RUST_LOG` is set.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Map `-v` occurrences to a level: 0=warn, 1=info, 2=debug, 3+=trace
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter used when `RUST_LOG` is unset or invalid
fn default_directive(verbose: u8) -> String {
    format!("ctc={}", level_for_verbosity(verbose))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
