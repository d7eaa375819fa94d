//! Declarative special-day records and their resolved, year-bound form.

use serde::Deserialize;

use al_time::Date;

/// One `[[day]]` entry of a special-day source, before resolution.
///
/// `icon`, `text` and `font` are templates that may embed `((...))`
/// expressions; `size` is used as written.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SpecialDayRecord {
    /// Fixed date (in the source's layout) or `((<ordinal> <weekday>))/<month>`.
    pub when: String,
    /// Whether the day is rendered as a holiday.
    #[serde(default)]
    pub holiday: bool,
    /// Icon path or name.
    #[serde(default)]
    pub icon: String,
    /// Note text.
    #[serde(default)]
    pub text: String,
    /// Note font.
    #[serde(default)]
    pub font: String,
    /// Note font size.
    #[serde(default)]
    pub size: f64,
}

/// The note printed on a special day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Note {
    /// Resolved text.
    pub text: String,
    /// Resolved font.
    pub font: String,
    /// Font size.
    pub size: f64,
}

/// A special day resolved for one configured year.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialDay {
    /// Concrete date in the configured year.
    pub date: Date,
    /// Whether the day is a holiday.
    pub holiday: bool,
    /// Resolved icon.
    pub icon: String,
    /// Resolved note.
    pub note: Note,
}
