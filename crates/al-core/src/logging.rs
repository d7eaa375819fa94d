//! Logging bootstrap.
//!
//! Library code only emits `tracing` events. Binaries and tests that want to
//! see them call [`init`] once; `RUST_LOG` takes precedence over the default
//! directive passed in.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::errors::{Error, Result};

/// Install a console `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `default_directive` (e.g. `"info"` or `"al_special=debug"`).
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `default_directive` is not a valid
/// filter, or if a global subscriber is already installed.
pub fn init(default_directive: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| {
            Error::InvalidArgument(format!("invalid log filter {default_directive:?}: {e}"))
        })?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(env_filter))
        .try_init()
        .map_err(|e| Error::InvalidArgument(format!("logging already initialized: {e}")))?;

    tracing::debug!(directive = default_directive, "logging initialized");
    Ok(())
}
