//! Host logging setup
//!
//! The calculator logs through the `log` facade.  On the host those
//! records are picked up by a `tracing-subscriber` formatter (through its
//! `tracing-log` bridge) and written to stderr, so stdout stays reserved
//! for the simulated display.
//!
//! The filter is read from [`LOG_ENV`] using `EnvFilter` directive syntax
//! (`debug`, `calcpad::calc=trace,warn`, ...).  Unset or unparsable
//! values fall back to `warn`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CALCPAD_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter for `directives`, or the default when they are
/// missing or invalid.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the stderr subscriber.  Fails if a global logger is already set.
pub fn init_logging() -> Result<()> {
    let filter = env_filter(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
