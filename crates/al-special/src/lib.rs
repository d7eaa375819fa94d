//! # al-special
//!
//! Special days: recurring (month, day) annotations whose `when`, icon, note
//! text and font are resolved afresh for each configured year.
//!
//! The pipeline is source → [`DateKeyResolver`] → [`resolve_fields`] (driving
//! the `((...))` [`expr`] language) → [`SpecialDayStore`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The embedded `((...))` expression language.
pub mod expr;

/// Per-record field resolution and the skip policy.
pub mod fields;

/// `SpecialDayKey`.
pub mod key;

/// Declarative records and resolved special days.
pub mod model;

/// TOML source decoding.
pub mod source;

/// `SpecialDayStore`.
pub mod store;

/// `when` parsing.
pub mod when;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use expr::{evaluate_expression, evaluate_template, EvalContext, Evaluated};
pub use fields::resolve_fields;
pub use key::SpecialDayKey;
pub use model::{Note, SpecialDay, SpecialDayRecord};
pub use source::SpecialDaySource;
pub use store::SpecialDayStore;
pub use when::{DateKeyResolver, FixedDate, Occurrence, RelativeOccurrence, WhenParser};
