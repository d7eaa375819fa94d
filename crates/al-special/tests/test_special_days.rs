//! End-to-end tests: TOML source → `SpecialDayStore`.

use std::io::Write;

use al_core::Error;
use al_special::{SpecialDayKey, SpecialDaySource, SpecialDayStore};
use al_time::{Date, RenderConfig, Weekday};
use approx::assert_relative_eq;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn cfg(year: i32, month: i64) -> RenderConfig {
    RenderConfig::new(year, month, Weekday::Sunday).unwrap()
}

fn build(toml: &str, cfg: &RenderConfig) -> Result<SpecialDayStore, Error> {
    SpecialDayStore::build(&SpecialDaySource::from_toml_str(toml).unwrap(), cfg)
}

/// A single `18/3` record with the given text template.
fn anniversary(text: &str) -> String {
    format!(
        r#"date_format = "2/1"

[[day]]
when = "18/3"
text = "{text}"
icon = "assets/anniversary.svg"
"#
    )
}

// ─── Expressions ──────────────────────────────────────────────────────────────

#[test]
fn anniversary_counter() {
    let source = anniversary("((year - 2011))º Aniversario De Casados");
    let store = build(&source, &cfg(2024, 3)).unwrap();
    let day = store.at(date(2024, 3, 18)).expect("special day for March 18");
    assert_eq!(day.note.text, "13º Aniversario De Casados");
    assert_eq!(day.icon, "assets/anniversary.svg");
    assert_eq!(day.date, date(2024, 3, 18));
}

#[test]
fn identifiers_in_text() {
    let cases = [
        ("Month ((month))", "Month 3"),
        ("Day ((day))", "Day 18"),
        ("Config year: ((cfg.year))", "Config year: 2024"),
        ("Config month: ((cfg.month))", "Config month: 3"),
        ("Year ((year)) has ((year - 2000)) years since 2000", "Year 2024 has 24 years since 2000"),
    ];
    for (template, expected) in cases {
        let store = build(&anniversary(template), &cfg(2024, 3)).unwrap();
        assert_eq!(store.at(date(2024, 3, 18)).unwrap().note.text, expected, "{template}");
    }
}

#[test]
fn arithmetic() {
    let cases = [
        ("year + 1", "2025"),
        ("year - 2011", "13"),
        ("year - 2000 + 10", "34"),
        ("month + 1", "4"),
        ("day - 1", "17"),
    ];
    for (expr, expected) in cases {
        let store = build(&anniversary(&format!("(({expr}))")), &cfg(2024, 3)).unwrap();
        assert_eq!(store.at(date(2024, 3, 18)).unwrap().note.text, expected, "{expr}");
    }
}

#[test]
fn non_positive_expression_omits_day() {
    let source = anniversary("((year - 2011))º Aniversario De Casados");
    let store = build(&source, &cfg(2010, 3)).unwrap();
    assert!(store.at(date(2010, 3, 18)).is_none());
    assert!(store.is_empty());
}

#[test]
fn icon_and_font_are_templates() {
    let toml = r#"date_format = "2/1"

[[day]]
when = "18/3"
text = "Test"
icon = "assets/icon-((year)).svg"
font = "font-((month))"
size = 7
"#;
    let store = build(toml, &cfg(2024, 3)).unwrap();
    let day = store.at(date(2024, 3, 18)).unwrap();
    assert_eq!(day.icon, "assets/icon-2024.svg");
    assert_eq!(day.note.font, "font-3");
    assert_relative_eq!(day.note.size, 7.0);
}

#[test]
fn unknown_identifier_fails_whole_load() {
    let toml = r#"date_format = "2/1"

[[day]]
when = "1/1"
text = "fine"

[[day]]
when = "18/3"
text = "((foo))"
"#;
    assert!(matches!(build(toml, &cfg(2024, 3)), Err(Error::ExpressionSyntax(_))));
}

// ─── Relative dates ───────────────────────────────────────────────────────────

#[test]
fn relative_dates() {
    let toml = r#"date_format = "2/1"

[[day]]
when = "((3rd sunday))/10"
text = "Mother's day"

[[day]]
when = "((1st friday))/3"
text = "First Friday"

[[day]]
when = "((last monday))/3"
text = "Last Monday"

[[day]]
when = "((2nd sunday))/5"
text = "Year ((year)) - Week ((year - 2000))"
"#;
    let store = build(toml, &cfg(2024, 0)).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.at(date(2024, 10, 20)).unwrap().note.text, "Mother's day");
    assert_eq!(store.at(date(2024, 3, 1)).unwrap().note.text, "First Friday");
    assert_eq!(store.at(date(2024, 3, 25)).unwrap().note.text, "Last Monday");
    assert_eq!(store.at(date(2024, 5, 12)).unwrap().note.text, "Year 2024 - Week 24");
}

#[test]
fn missing_occurrence_fails_load() {
    let toml = "date_format = \"2/1\"\n\n[[day]]\nwhen = \"((5th friday))/2\"\n";
    assert!(matches!(
        build(toml, &cfg(2024, 2)),
        Err(Error::OutOfRangeOccurrence { .. })
    ));
}

#[test]
fn bad_when_fails_load() {
    let toml = "date_format = \"2/1\"\n\n[[day]]\nwhen = \"someday\"\n";
    assert!(matches!(build(toml, &cfg(2024, 2)), Err(Error::InvalidWhenSpec { .. })));
}

// ─── Store semantics ──────────────────────────────────────────────────────────

#[test]
fn later_record_wins_on_collision() {
    let toml = r#"date_format = "2/1"

[[day]]
when = "20/10"
text = "fixed"

[[day]]
when = "((3rd sunday))/10"
text = "relative"
holiday = true
"#;
    let store = build(toml, &cfg(2024, 10)).unwrap();
    assert_eq!(store.len(), 1);
    let day = store.get(SpecialDayKey::new(10, 20)).unwrap();
    assert_eq!(day.note.text, "relative");
    assert!(day.holiday);

    // In 2023 the third Sunday is the 15th, so both survive.
    assert_eq!(build(toml, &cfg(2023, 10)).unwrap().len(), 2);
}

#[test]
fn rebuild_is_idempotent() {
    let source = SpecialDaySource::from_toml_str(&anniversary("((year - 2011)) years")).unwrap();
    let cfg = cfg(2024, 3);
    let a = SpecialDayStore::build(&source, &cfg).unwrap();
    let b = SpecialDayStore::build(&source, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.year(), 2024);
}

#[test]
fn store_is_year_bound() {
    let source = SpecialDaySource::from_toml_str(&anniversary("((year - 2011)) years")).unwrap();
    let texts: Vec<String> = [2012, 2020, 2030]
        .into_iter()
        .map(|year| {
            let store = SpecialDayStore::build(&source, &cfg(year, 3)).unwrap();
            store.get(SpecialDayKey::new(3, 18)).unwrap().note.text.clone()
        })
        .collect();
    assert_eq!(texts, ["1 years", "9 years", "19 years"]);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(anniversary("((year - 2011))º").as_bytes()).unwrap();

    let store = SpecialDayStore::load(file.path(), &cfg(2024, 3)).unwrap();
    assert_eq!(store.at(date(2024, 3, 18)).unwrap().note.text, "13º");
}

#[test]
fn load_reports_decode_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[[day]\nwhen = ").unwrap();
    assert!(matches!(
        SpecialDayStore::load(file.path(), &cfg(2024, 3)),
        Err(Error::SourceDecode(_))
    ));
}
