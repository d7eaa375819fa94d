//! # al-core
//!
//! Core types shared across the almanac workspace: the error hierarchy, the
//! `Handle` used to share a special-day store between calendar grids, and
//! the logging bootstrap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Shared read-only handle (`Handle<T>`).
pub mod handle;

/// `tracing` subscriber bootstrap.
pub mod logging;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::Handle;
