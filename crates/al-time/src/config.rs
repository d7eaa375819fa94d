//! Resolved rendering configuration.
//!
//! [`RenderConfig`] is the explicit value every consumer receives: the year
//! being rendered, whether a single month or the whole year is wanted, and
//! which weekday opens each calendar row. Loading it from flags or files is
//! left to the caller.

use al_core::errors::Result;
use al_core::fail;

use crate::month::Month;
use crate::weekday::Weekday;

/// Month number reserved to mean "render every month of the year".
pub const WHOLE_YEAR: u8 = 0;

/// Which part of the year is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// A single month.
    Month(Month),
    /// All twelve months.
    Year,
}

impl Span {
    /// Build from a month number where [`WHOLE_YEAR`] selects the full year.
    pub fn from_number(n: i64) -> Result<Self> {
        if n == i64::from(WHOLE_YEAR) {
            return Ok(Span::Year);
        }
        Month::try_from_number(n).map(Span::Month)
    }

    /// The month number, or [`WHOLE_YEAR`].
    pub fn number(&self) -> u8 {
        match self {
            Span::Month(m) => m.number(),
            Span::Year => WHOLE_YEAR,
        }
    }

    /// The months covered, in calendar order.
    pub fn months(&self) -> Vec<Month> {
        match self {
            Span::Month(m) => vec![*m],
            Span::Year => Month::ALL.to_vec(),
        }
    }
}

/// The configuration a rendering run is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Year being rendered.
    pub year: i32,
    /// Month or whole year.
    pub span: Span,
    /// First column of every calendar week.
    pub week_start: Weekday,
}

impl RenderConfig {
    /// Build a configuration, validating `month` (0 = whole year, else 1–12).
    pub fn new(year: i32, month: i64, week_start: Weekday) -> Result<Self> {
        Ok(Self {
            year,
            span: Span::from_number(month)?,
            week_start,
        })
    }

    /// A whole-year configuration.
    pub fn whole_year(year: i32, week_start: Weekday) -> Self {
        Self {
            year,
            span: Span::Year,
            week_start,
        }
    }

    /// Configured month number as seen by expressions (`cfg.month`);
    /// [`WHOLE_YEAR`] when rendering the full year.
    pub fn month_number(&self) -> u8 {
        self.span.number()
    }
}

/// Parse a week-start day.
///
/// Accepts a single digit `0`–`6` (0 = Sunday) or a full / three-letter day
/// name in any case, surrounded by optional whitespace.
pub fn parse_week_start(s: &str) -> Result<Weekday> {
    let trimmed = s.trim();
    let weekday = match trimmed.parse::<u8>() {
        Ok(n) => Weekday::from_number(n),
        Err(_) => trimmed.parse::<Weekday>().ok(),
    };
    match weekday {
        Some(weekday) => Ok(weekday),
        None => fail!("invalid week start: {s:?} (must be 0-6 or a day name)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_core::Error;

    #[test]
    fn week_start_forms() {
        assert_eq!(parse_week_start("0").unwrap(), Weekday::Sunday);
        assert_eq!(parse_week_start("6").unwrap(), Weekday::Saturday);
        assert_eq!(parse_week_start(" Monday ").unwrap(), Weekday::Monday);
        assert_eq!(parse_week_start("tue").unwrap(), Weekday::Tuesday);
        for bad in ["7", "-1", "300", "someday", ""] {
            let err = parse_week_start(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument(ref msg) if msg.contains("0-6")),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn span_sentinel() {
        let cfg = RenderConfig::new(2024, 0, Weekday::Sunday).unwrap();
        assert_eq!(cfg.span, Span::Year);
        assert_eq!(cfg.span.months().len(), 12);
        assert_eq!(cfg.month_number(), WHOLE_YEAR);

        let cfg = RenderConfig::new(2024, 3, Weekday::Monday).unwrap();
        assert_eq!(cfg.span, Span::Month(Month::March));
        assert_eq!(cfg.month_number(), 3);

        assert_eq!(
            RenderConfig::new(2024, 13, Weekday::Sunday),
            Err(Error::InvalidMonth(13))
        );
    }
}
