//! Integration tests for `CalendarGrid` layout and special-day linking.

use al_core::Handle;
use al_grid::{CalendarGrid, RendererRegistry};
use al_special::{SpecialDaySource, SpecialDayStore};
use al_time::{Date, Month, RenderConfig, Weekday};
use proptest::prelude::*;

fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::from_number(n).unwrap())
}

// ─── Layout invariants ────────────────────────────────────────────────────────

/// Whole-week layout checks shared by the sampled and exhaustive tests.
fn assert_whole_weeks(year: i32, month: i64, start: Weekday) {
    let grid = CalendarGrid::new(year, month, start, Handle::empty()).unwrap();
    let days: Vec<_> = grid.days().copied().collect();
    let ctx = format!("{year}-{month:02} starting {start}");

    assert_eq!(days.len() % 7, 0, "{ctx}");
    assert_eq!(days.len(), grid.day_count(), "{ctx}");
    assert!((4..=6).contains(&grid.weeks().len()), "{ctx}");
    assert_eq!(days[0].weekday(), start, "{ctx}");
    assert_eq!(days[days.len() - 1].weekday(), start.plus(6), "{ctx}");

    // consecutive dates
    for pair in days.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, 1, "{ctx}");
    }

    // every day of the month appears exactly once, flagged as current
    let first = Date::from_ymd(year, month as u8, 1).unwrap();
    let len = i32::from(first.end_of_month().day_of_month());
    let current: Vec<_> = days.iter().filter(|d| d.is_current_month).collect();
    assert_eq!(current.len() as i32, len, "{ctx}");
    assert_eq!(current[0].date, first, "{ctx}");
    for d in &days {
        assert_eq!(d.day_number, d.date.day_of_month(), "{ctx}");
    }

    // padding is shorter than a week on both ends
    assert!(first - days[0].date < 7, "{ctx}");
    assert!(days[days.len() - 1].date - first.end_of_month() < 7, "{ctx}");
}

#[test]
fn every_month_and_week_start() {
    // 2015 has a four-week February (Sunday start), 2024 is a leap year.
    for year in [2015, 2024] {
        for month in 1..=12 {
            for n in 0..7 {
                assert_whole_weeks(year, month, Weekday::from_number(n).unwrap());
            }
        }
    }
    let feb_2015 = CalendarGrid::new(2015, 2, Weekday::Sunday, Handle::empty()).unwrap();
    assert_eq!(feb_2015.weeks().len(), 4);
    let feb_2024 = CalendarGrid::new(2024, 2, Weekday::Sunday, Handle::empty()).unwrap();
    assert_eq!(feb_2024.days().filter(|d| d.is_current_month).count(), 29);
}

proptest! {
    #[test]
    fn grid_covers_month_in_whole_weeks(
        year in 1600i32..2600,
        month in 1i64..=12,
        start in weekday()
    ) {
        assert_whole_weeks(year, month, start);
    }
}

#[test]
fn year_grids() {
    let grids = CalendarGrid::for_year(2024, Weekday::Sunday, Handle::empty()).unwrap();
    assert_eq!(grids.len(), 12);
    for (grid, month) in grids.iter().zip(Month::ALL) {
        assert_eq!(grid.month(), month);
        assert_eq!(grid.year(), 2024);
    }
}

#[test]
fn config_selects_months() {
    let one = RenderConfig::new(2024, 7, Weekday::Monday).unwrap();
    let grids = CalendarGrid::for_config(&one, Handle::empty()).unwrap();
    assert_eq!(grids.len(), 1);
    assert_eq!(grids[0].month(), Month::July);
    assert_eq!(grids[0].week_start(), Weekday::Monday);

    let all = RenderConfig::whole_year(2024, Weekday::Saturday);
    assert_eq!(CalendarGrid::for_config(&all, Handle::empty()).unwrap().len(), 12);
}

// ─── Special days through the shared store ────────────────────────────────────

const SOURCE: &str = r#"date_format = "2/1"

[[day]]
when = "18/3"
text = "((year - 2011))º Aniversario De Casados"

[[day]]
when = "1/4"
text = "April first"
holiday = true

[[day]]
when = "((3rd sunday))/10"
text = "Día de la madre"
"#;

#[test]
fn grids_share_one_store() {
    let cfg = RenderConfig::whole_year(2024, Weekday::Sunday);
    let source = SpecialDaySource::from_toml_str(SOURCE).unwrap();
    let store = Handle::new(SpecialDayStore::build(&source, &cfg).unwrap());
    let grids = CalendarGrid::for_config(&cfg, store.clone()).unwrap();

    assert!(grids.iter().all(|g| g.special_days().ptr_eq(&store)));

    let march = &grids[2];
    let anniversary = march
        .days()
        .find(|d| d.is_current_month && d.day_number == 18)
        .unwrap();
    assert_eq!(march.note(anniversary).unwrap().text, "13º Aniversario De Casados");

    // April 1 trails the March grid and still links to its special day.
    let trailing = march.days().find(|d| !d.is_current_month && d.day_number == 1).unwrap();
    assert_eq!(march.note(trailing).unwrap().text, "April first");
    assert!(march.is_holiday(trailing));

    let october = &grids[9];
    let marked: Vec<_> = october
        .days()
        .filter(|d| october.special_day(d).is_some())
        .map(|d| d.date)
        .collect();
    assert_eq!(marked, [Date::from_ymd(2024, 10, 20).unwrap()]);
}

#[test]
fn empty_handle_has_no_special_days() {
    let grid = CalendarGrid::new(2024, 3, Weekday::Sunday, Handle::empty()).unwrap();
    assert!(grid.days().all(|d| d.special_key().is_none() && grid.note(d).is_none()));
}

#[test]
fn render_through_registry() {
    let cfg = RenderConfig::new(2024, 3, Weekday::Sunday).unwrap();
    let source = SpecialDaySource::from_toml_str(SOURCE).unwrap();
    let store = Handle::new(SpecialDayStore::build(&source, &cfg).unwrap());
    let grids = CalendarGrid::for_config(&cfg, store).unwrap();

    let registry = RendererRegistry::with_defaults();
    let mut out = Vec::new();
    registry.get("Text").unwrap().render_year(&grids, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("March 2024\n"));
    assert!(text.contains(" 18: 13º Aniversario De Casados"));
    // notes of trailing days belong to the next month
    assert!(!text.contains("April first"));
}
