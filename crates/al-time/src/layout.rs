//! Fixed-date layouts.
//!
//! A special-day source declares one date layout for all of its fixed
//! `when` values. Layouts are written by example against the reference date
//! *Monday, January 2, 2006*: `2/1` means day then month, `Jan 02` means
//! abbreviated month name then zero-padded day, and so on. A layout that
//! contains `%` is taken verbatim as a chrono strftime format instead.
//!
//! Only month and day are extracted; a parsed year or weekday is discarded.

use chrono::format::{self, Parsed, StrftimeItems};

use al_core::errors::{Error, Result};

use crate::date::days_in_month;

/// Reference-date tokens and their strftime equivalents, longest first so
/// that `2006` wins over `2` and `January` over `Jan`.
const REFERENCE_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    ("2006", "%Y"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("01", "%m"),
    ("02", "%d"),
    ("_2", "%e"),
    ("06", "%y"),
    ("1", "%m"),
    ("2", "%d"),
];

/// Any year with a 29 February; fixed keys are year-independent.
const LEAP_YEAR: i32 = 2000;

/// A compiled fixed-date layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLayout {
    layout: String,
    format: String,
}

impl DateLayout {
    /// Compile `layout`.
    pub fn new(layout: &str) -> Self {
        let format = if layout.contains('%') {
            layout.to_string()
        } else {
            reference_to_strftime(layout)
        };
        Self {
            layout: layout.to_string(),
            format,
        }
    }

    /// The equivalent strftime format.
    pub fn strftime(&self) -> &str {
        &self.format
    }

    /// Parse `s` and return its `(month, day)`.
    ///
    /// # Errors
    /// [`Error::InvalidWhenSpec`] if `s` does not match the layout, if the
    /// layout lacks a month or a day, or if the day does not exist in that
    /// month of a leap year.
    pub fn parse_month_day(&self, s: &str) -> Result<(u8, u8)> {
        let invalid = |reason: String| Error::InvalidWhenSpec {
            when: s.to_string(),
            reason,
        };

        let mut parsed = Parsed::new();
        format::parse(&mut parsed, s.trim(), StrftimeItems::new(&self.format))
            .map_err(|e| invalid(format!("can't parse as {:?}: {e}", self.layout)))?;

        let month = parsed
            .month()
            .ok_or_else(|| invalid(format!("layout {:?} has no month", self.layout)))?;
        let day = parsed
            .day()
            .ok_or_else(|| invalid(format!("layout {:?} has no day", self.layout)))?;

        // chrono bounds both fields (1–12, 1–31) while parsing.
        let (month, day) = (month as u8, day as u8);
        if day > days_in_month(LEAP_YEAR, month) {
            return Err(invalid(format!("day {day} does not exist in month {month}")));
        }
        Ok((month, day))
    }
}

impl std::fmt::Display for DateLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.layout)
    }
}

fn reference_to_strftime(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;
    'outer: while !rest.is_empty() {
        for (token, spec) in REFERENCE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}
