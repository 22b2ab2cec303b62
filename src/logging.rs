//! Logging initialisation.
//!
//! The level comes from `RUST_LOG` (default `info`), for example
//! `RUST_LOG=turn_schedule=trace` to see every rejected candidate.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber, writing to stderr.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Debug-level subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
