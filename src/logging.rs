//! Diagnostic logging setup.
//!
//! Progress lines for the user go straight to stdout; this only wires up
//! `tracing` diagnostics, which go to stderr. The filter comes from the
//! configured level raised by `-v`, never from the environment.
//!
//! The subscriber is installed before the config is read so config loading
//! can log; [`set_level`] then swaps in the configured filter.

use crate::config::LogLevel;
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Effective level for a configured base level and a `-v` count.
pub fn effective_level(configured: LogLevel, verbose: u8) -> LogLevel {
    configured.raised(verbose)
}

/// Install the global subscriber.
///
/// A second call (or a subscriber installed elsewhere, as in tests) is ignored.
pub fn init(level: LogLevel) {
    let (filter, handle) = reload::Layer::new(EnvFilter::new(level.as_directive()));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if result.is_ok() {
        let _ = FILTER.set(handle);
        tracing::debug!(level = level.as_directive(), "logging initialized");
    }
}

/// Replace the level of the subscriber installed by [`init`].
///
/// Returns `false` when [`init`] never installed one.
pub fn set_level(level: LogLevel) -> bool {
    let Some(handle) = FILTER.get() else {
        return false;
    };
    match handle.reload(EnvFilter::new(level.as_directive())) {
        Ok(()) => {
            tracing::debug!(level = level.as_directive(), "log level changed");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to change log level");
            false
        }
    }
}
