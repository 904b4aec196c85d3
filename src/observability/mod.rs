//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application. [`init_tracing`] is a convenience for
//! callers that want the default formatter, and [`init_tracing_from`] takes
//! the default filter from `[logging]` in the loaded config.

use crate::config::CollabnetConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Returns `false` if a global subscriber was already set.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok()
}

/// [`init_tracing`] with `logging.filter` as the default filter.
pub fn init_tracing_from(config: &CollabnetConfig) -> bool {
    init_tracing(&config.log_filter())
}
