//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to 1970-01-01
//! (serial 0), using the proleptic Gregorian calendar. Conversion to and from
//! (year, month, day) uses the era-based civil-day algorithm, so there is no
//! fixed supported window beyond [`MIN_YEAR`]..=[`MAX_YEAR`].

use al_core::ensure;
use al_core::errors::{Error, Result};

use crate::weekday::Weekday;

/// Smallest year accepted by [`Date::from_ymd`].
pub const MIN_YEAR: i32 = -100_000;

/// Largest year accepted by [`Date::from_ymd`].
pub const MAX_YEAR: i32 = 100_000;

/// A calendar date represented as a day serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month.into()));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return (year, month, day) in one conversion.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (4).
        Weekday::from_index((self.0 + 4).rem_euclid(7) as u8)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Self {
        Date(self.0 + n)
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Sunday, 2024, 10)` returns the
    /// third Sunday of October 2024 (2024-10-20).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is zero, [`Error::InvalidMonth`] for a
    /// bad month, and [`Error::OutOfRangeOccurrence`] if the month has fewer
    /// than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let skip = weekday.days_since(first.weekday());
        let day = 1 + u32::from(skip) + 7 * (u32::from(n) - 1);
        let out_of_range = || Error::OutOfRangeOccurrence {
            ordinal: ordinal_name(n),
            weekday: weekday.to_string(),
            year,
            month,
        };
        if day > u32::from(days_in_month(year, month)) {
            return Err(out_of_range());
        }
        let date = first.add_days(day as i32 - 1);
        if date.weekday() != weekday {
            return Err(out_of_range());
        }
        Ok(date)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    ///
    /// Walks back at most six days from the end of the month, so this only
    /// fails for an invalid year or month.
    pub fn last_weekday(weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        let mut date = Date::from_ymd(year, month, 1)?.end_of_month();
        while date.weekday() != weekday {
            date = date - 1;
        }
        Ok(date)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

/// ISO 8601 calendar date, `YYYY-MM-DD`.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year. Returns 0 for a month outside 1–12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// English ordinal for `n` (`1st`, `2nd`, `3rd`, `4th`, `11th`, …).
pub fn ordinal_name(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Days from 1970-01-01 to (year, month, day).
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let d = i32::from(day);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`serial_from_ymd`].
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m as u8, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
