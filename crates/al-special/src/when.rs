//! Resolution of `when` values into [`SpecialDayKey`]s.
//!
//! A [`DateKeyResolver`] holds an ordered list of [`WhenParser`]s. Each
//! parser either declines a string (`Ok(None)`), resolves it, or rejects it
//! with an error; the first resolution wins and errors stop the search.
//!
//! The default order is [`RelativeOccurrence`] (`((3rd sunday))/10`,
//! `((last monday))/3`) followed by [`FixedDate`] in the source's layout.

use once_cell::sync::Lazy;
use regex::Regex;

use al_core::errors::{Error, Result};
use al_time::{Date, DateLayout, Weekday};

use crate::key::SpecialDayKey;

static RELATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\((.+)\)\)/(\d+)$").expect("valid relative date regex"));

/// One strategy for turning a `when` string into a key.
pub trait WhenParser: std::fmt::Debug + Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Resolve `when` for the configured `year`.
    ///
    /// Returns `Ok(None)` when `when` is not written in this parser's syntax.
    fn parse(&self, when: &str, year: i32) -> Result<Option<SpecialDayKey>>;
}

/// Which occurrence of a weekday within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// The n-th occurrence (1-based).
    Nth(u8),
    /// The last occurrence.
    Last,
}

impl Occurrence {
    /// Parse `1st`…`5th`, `first`…`fifth` or `last`, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let occurrence = match s.to_ascii_lowercase().as_str() {
            "1st" | "first" => Occurrence::Nth(1),
            "2nd" | "second" => Occurrence::Nth(2),
            "3rd" | "third" => Occurrence::Nth(3),
            "4th" | "fourth" => Occurrence::Nth(4),
            "5th" | "fifth" => Occurrence::Nth(5),
            "last" => Occurrence::Last,
            _ => return None,
        };
        Some(occurrence)
    }

    /// The date of this occurrence of `weekday` in `year`/`month`.
    pub fn resolve(&self, weekday: Weekday, year: i32, month: u8) -> Result<Date> {
        match *self {
            Occurrence::Nth(n) => Date::nth_weekday(n, weekday, year, month),
            Occurrence::Last => Date::last_weekday(weekday, year, month),
        }
    }
}

/// `((<ordinal> <weekday>))/<month>`, e.g. `((3rd sunday))/10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeOccurrence;

impl WhenParser for RelativeOccurrence {
    fn name(&self) -> &str {
        "relative"
    }

    fn parse(&self, when: &str, year: i32) -> Result<Option<SpecialDayKey>> {
        let Some(caps) = RELATIVE_RE.captures(when.trim()) else {
            return Ok(None);
        };
        let invalid = |reason: String| Error::InvalidWhenSpec {
            when: when.to_string(),
            reason,
        };

        let month = caps[2]
            .parse::<u8>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| invalid(format!("month {} out of range (must be 1-12)", &caps[2])))?;

        let mut words = caps[1].split_whitespace();
        let (Some(ordinal), Some(weekday), None) = (words.next(), words.next(), words.next())
        else {
            return Err(invalid(
                "expected '<ordinal> <weekday>', e.g. '1st sunday' or 'last monday'".into(),
            ));
        };
        let occurrence = Occurrence::parse(ordinal)
            .ok_or_else(|| invalid(format!("unknown ordinal {ordinal:?}")))?;
        let weekday = weekday
            .parse::<Weekday>()
            .map_err(|_| invalid(format!("unknown weekday {weekday:?}")))?;

        let date = occurrence.resolve(weekday, year, month)?;
        Ok(Some(SpecialDayKey::from_date(date)))
    }
}

/// A fixed month/day written in the source's date layout.
#[derive(Debug, Clone)]
pub struct FixedDate {
    layout: DateLayout,
}

impl FixedDate {
    /// Parser for `layout` (see [`DateLayout`]).
    pub fn new(layout: &str) -> Self {
        Self {
            layout: DateLayout::new(layout),
        }
    }
}

impl WhenParser for FixedDate {
    fn name(&self) -> &str {
        "fixed"
    }

    fn parse(&self, when: &str, _year: i32) -> Result<Option<SpecialDayKey>> {
        let (month, day) = self.layout.parse_month_day(when)?;
        Ok(Some(SpecialDayKey::new(month, day)))
    }
}

/// Ordered list of `when` parsers; the first to resolve wins.
#[derive(Debug)]
pub struct DateKeyResolver {
    parsers: Vec<Box<dyn WhenParser>>,
}

impl DateKeyResolver {
    /// The standard resolver: relative occurrences, then fixed dates in
    /// `layout`.
    pub fn new(layout: &str) -> Self {
        Self::with_parsers(vec![
            Box::new(RelativeOccurrence),
            Box::new(FixedDate::new(layout)),
        ])
    }

    /// A resolver trying `parsers` in order.
    pub fn with_parsers(parsers: Vec<Box<dyn WhenParser>>) -> Self {
        Self { parsers }
    }

    /// Resolve `when` against the configured `year`.
    ///
    /// # Errors
    /// The first parser error, or [`Error::InvalidWhenSpec`] if every parser
    /// declines.
    pub fn resolve(&self, when: &str, year: i32) -> Result<SpecialDayKey> {
        for parser in &self.parsers {
            if let Some(key) = parser.parse(when, year)? {
                tracing::trace!(when, parser = parser.name(), %key, "resolved date key");
                return Ok(key);
            }
        }
        let tried: Vec<&str> = self.parsers.iter().map(|p| p.name()).collect();
        Err(Error::InvalidWhenSpec {
            when: when.to_string(),
            reason: format!("not accepted by any parser ({})", tried.join(", ")),
        })
    }
}
