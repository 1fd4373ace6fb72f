//! Tracing setup shared by both binaries.
//!
//! Diagnostics go to standard error so they never mix with task listings on
//! standard output. The filter comes from `TODO_LOG` (same syntax as
//! `RUST_LOG`) and falls back to the directive the binary passes in.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TODO_LOG";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(default_directive: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
