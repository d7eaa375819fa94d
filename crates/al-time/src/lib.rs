//! # al-time
//!
//! Date, weekday, month, fixed-date layout, and render configuration types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Resolved rendering configuration and week-start parsing.
pub mod config;

/// `Date` type.
pub mod date;

/// Fixed-date layouts (`"2/1"`, `"Jan 02"`, strftime).
pub mod layout;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::{parse_week_start, RenderConfig, Span, WHOLE_YEAR};
pub use date::Date;
pub use layout::DateLayout;
pub use month::Month;
pub use weekday::Weekday;
