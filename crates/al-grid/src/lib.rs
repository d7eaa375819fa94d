//! # al-grid
//!
//! Month calendar grids padded to whole weeks, and the renderers that print
//! them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarGrid`, `Week` and `Day`.
pub mod grid;

/// `Renderer`, `RendererRegistry` and `TextRenderer`.
pub mod render;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use grid::{CalendarGrid, Day, Week};
pub use render::{Renderer, RendererRegistry, TextRenderer};
