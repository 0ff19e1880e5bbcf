//! Tracing setup for hosts that embed the plugin
//!
//! Hosts with their own subscriber can skip this entirely; `init` is a
//! convenience that respects `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a formatted subscriber. Safe to call once per process; returns
/// quietly if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
