//! `Weekday`: day-of-week enum.

use std::str::FromStr;

use al_core::errors::Error;

/// Day of the week.
///
/// Variants are numbered 0–6 starting on Sunday, which is also how a
/// week-start day is written in configuration (`0` = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    #[default]
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from a number 0–6 (0 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// Construct from any integer, reduced modulo 7.
    pub(crate) fn from_index(n: u8) -> Self {
        Self::ALL[usize::from(n % 7)]
    }

    /// Return the number 0–6 (0 = Sunday).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Number of days to walk forward from `earlier` to reach `self` (0–6).
    pub fn days_since(&self, earlier: Weekday) -> u8 {
        (self.number() + 7 - earlier.number()) % 7
    }

    /// The weekday `n` days after this one.
    pub fn plus(&self, n: u8) -> Self {
        Self::from_index(self.number() + n % 7)
    }

    /// The seven weekdays in column order for a week starting on `self`.
    pub fn week_from(&self) -> [Weekday; 7] {
        let mut days = Self::ALL;
        days.rotate_left(usize::from(self.number()));
        days
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Three-letter English abbreviation (`"Sun"`, `"Mon"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name.
    pub fn long_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Parses a full or three-letter English name, case-insensitively.
impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                wanted == day.long_name().to_ascii_lowercase()
                    || wanted == day.short_name().to_ascii_lowercase()
            })
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday: {s:?}")))
    }
}
