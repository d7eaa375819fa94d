//! `CalendarGrid`: a month laid out in whole weeks.
//!
//! The grid starts on the configured week-start day on or before the 1st of
//! the month and ends on the last day of the week containing the month's
//! final day. Every week has exactly seven days, so a grid spans 4, 5 or 6
//! weeks.

use al_core::errors::Result;
use al_core::Handle;
use al_special::{Note, SpecialDay, SpecialDayKey, SpecialDayStore};
use al_time::{Date, Month, RenderConfig, Weekday};

/// Seven consecutive days, starting on the grid's week start.
pub type Week = [Day; 7];

/// One cell of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    /// The date shown in this cell.
    pub date: Date,
    /// Day of the month (1–31).
    pub day_number: u8,
    /// `false` for leading/trailing days borrowed from adjacent months.
    pub is_current_month: bool,
    special: Option<SpecialDayKey>,
}

impl Day {
    /// Key of the special day attached to this cell, if any.
    ///
    /// Resolve it with [`CalendarGrid::special_day`].
    pub fn special_key(&self) -> Option<SpecialDayKey> {
        self.special
    }

    /// Weekday of this cell.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// ISO date (`YYYY-MM-DD`), used to name per-day elements.
    pub fn name(&self) -> String {
        self.date.to_string()
    }
}

/// A month laid out as whole weeks, linked to a shared special-day store.
#[derive(Debug, Clone)]
pub struct CalendarGrid {
    year: i32,
    month: Month,
    week_start: Weekday,
    weeks: Vec<Week>,
    special_days: Handle<SpecialDayStore>,
}

impl CalendarGrid {
    /// Build the grid for `year`/`month`.
    ///
    /// # Errors
    /// [`al_core::Error::InvalidMonth`] if `month` is not 1–12, or a date
    /// error if `year` is out of range.
    pub fn new(
        year: i32,
        month: i64,
        week_start: Weekday,
        special_days: Handle<SpecialDayStore>,
    ) -> Result<Self> {
        let month = Month::try_from_number(month)?;
        Self::for_month(year, month, week_start, special_days)
    }

    /// Build the grid for `year`/`month`.
    pub fn for_month(
        year: i32,
        month: Month,
        week_start: Weekday,
        special_days: Handle<SpecialDayStore>,
    ) -> Result<Self> {
        let first = Date::from_ymd(year, month.number(), 1)?;
        let last = first.end_of_month();
        let offset = first.weekday().days_since(week_start);
        let store = special_days.get();

        let mut weeks = Vec::with_capacity(6);
        let mut cursor = first - i32::from(offset);
        while cursor <= last {
            let week_start_date = cursor;
            weeks.push(std::array::from_fn(|i| {
                make_day(week_start_date + i as i32, year, month, store)
            }));
            cursor += 7;
        }

        tracing::trace!(
            year,
            month = month.number(),
            %week_start,
            weeks = weeks.len(),
            "built calendar grid"
        );

        Ok(Self {
            year,
            month,
            week_start,
            weeks,
            special_days,
        })
    }

    /// The same year, week start and store, for another month.
    pub fn clone_at(&self, month: i64) -> Result<Self> {
        Self::new(self.year, month, self.week_start, self.special_days.clone())
    }

    /// Twelve grids, January to December, sharing one store.
    pub fn for_year(
        year: i32,
        week_start: Weekday,
        special_days: Handle<SpecialDayStore>,
    ) -> Result<Vec<Self>> {
        Month::ALL
            .into_iter()
            .map(|month| Self::for_month(year, month, week_start, special_days.clone()))
            .collect()
    }

    /// The grids `cfg` asks for: one month, or the whole year.
    pub fn for_config(
        cfg: &RenderConfig,
        special_days: Handle<SpecialDayStore>,
    ) -> Result<Vec<Self>> {
        cfg.span
            .months()
            .into_iter()
            .map(|month| Self::for_month(cfg.year, month, cfg.week_start, special_days.clone()))
            .collect()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Year of the month shown.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month shown.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Weekday of the first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Weeks in display order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All cells, row by row.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flatten()
    }

    /// Number of cells (always a multiple of 7).
    pub fn day_count(&self) -> usize {
        self.weeks.len() * 7
    }

    /// The store this grid reads special days from.
    pub fn special_days(&self) -> &Handle<SpecialDayStore> {
        &self.special_days
    }

    /// Column headers: the seven weekdays starting at the week start.
    pub fn column_weekdays(&self) -> [Weekday; 7] {
        self.week_start.week_from()
    }

    // ── Per-day lookups ───────────────────────────────────────────────────────

    /// The special day attached to `day`.
    pub fn special_day(&self, day: &Day) -> Option<&SpecialDay> {
        let key = day.special?;
        self.special_days.get()?.get(key)
    }

    /// The note attached to `day`.
    pub fn note(&self, day: &Day) -> Option<&Note> {
        self.special_day(day).map(|special| &special.note)
    }

    /// Weekends are always holidays; other days only when their special day
    /// says so.
    pub fn is_holiday(&self, day: &Day) -> bool {
        day.weekday().is_weekend() || self.special_day(day).is_some_and(|s| s.holiday)
    }
}

fn make_day(date: Date, year: i32, month: Month, store: Option<&SpecialDayStore>) -> Day {
    let (y, m, d) = date.ymd();
    let key = SpecialDayKey::new(m, d);
    Day {
        date,
        day_number: d,
        is_current_month: y == year && m == month.number(),
        special: store.filter(|s| s.contains_key(key)).map(|_| key),
    }
}
