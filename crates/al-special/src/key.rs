//! `SpecialDayKey`: the year-independent (month, day) identity of a special
//! day.

use al_time::Date;

/// Month/day pair a special day recurs on, independent of year.
///
/// Ordered by month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpecialDayKey {
    /// Month (1–12).
    pub month: u8,
    /// Day of the month (1–31).
    pub day: u8,
}

impl SpecialDayKey {
    /// Create a key. The caller guarantees the pair exists in some year.
    pub fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Key of `date`, dropping its year.
    pub fn from_date(date: Date) -> Self {
        let (_, month, day) = date.ymd();
        Self { month, day }
    }
}

impl From<Date> for SpecialDayKey {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl std::fmt::Display for SpecialDayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}
