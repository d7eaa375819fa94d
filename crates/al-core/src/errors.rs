//! Error types for almanac.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. The `ensure!` and `fail!`
//! convenience macros short-circuit with [`Error::InvalidArgument`].
//!
//! Skipping a special day because an expression evaluated to zero or less is
//! *not* an error and never produces one of these values.

use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A month number outside 1–12 (or 0–12 where the whole-year sentinel is
    /// accepted).
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    /// A `when` value that no date-key parser accepts.
    #[error("invalid 'when' value {when:?}: {reason}")]
    InvalidWhenSpec {
        /// The offending `when` string.
        when: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The requested ordinal weekday does not exist in the month.
    #[error("{ordinal} {weekday} does not exist in {year}-{month:02}")]
    OutOfRangeOccurrence {
        /// Ordinal as written by the author (e.g. `"5th"`).
        ordinal: String,
        /// Weekday name.
        weekday: String,
        /// Year of the month searched.
        year: i32,
        /// Month searched (1–12).
        month: u8,
    },

    /// Malformed embedded expression, unknown identifier or unsupported
    /// operator.
    #[error("expression syntax error: {0}")]
    ExpressionSyntax(String),

    /// The declarative special-day source could not be read or decoded.
    #[error("can't decode special days source: {0}")]
    SourceDecode(String),

    /// Date construction out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output sink failure while rendering.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use al_core::{ensure, errors::Error};
/// fn positive(x: i32) -> al_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use al_core::{fail, errors::Error};
/// fn always_err() -> al_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
