//! Decoding of declarative special-day sources.
//!
//! A source is a TOML document:
//!
//! ```toml
//! date_format = "2/1"
//!
//! [[day]]
//! when = "18/3"
//! holiday = false
//! icon = "assets/anniversary.svg"
//! text = "((year - 2011))º Aniversario De Casados"
//! font = "courier"
//! size = 8
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use al_core::errors::{Error, Result};

use crate::model::SpecialDayRecord;

/// A decoded special-day source.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SpecialDaySource {
    /// Layout of every fixed `when` value (see `al_time::DateLayout`).
    #[serde(default)]
    pub date_format: String,
    /// Records in document order.
    #[serde(default, rename = "day")]
    pub days: Vec<SpecialDayRecord>,
}

impl SpecialDaySource {
    /// Decode a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::SourceDecode(e.to_string()))
    }

    /// Read and decode the TOML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::SourceDecode(format!("can't read {}: {e}", path.display())))?;
        let source = toml::from_str::<Self>(&content)
            .map_err(|e| Error::SourceDecode(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            records = source.days.len(),
            "decoded special days"
        );
        Ok(source)
    }
}

impl FromStr for SpecialDaySource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_document() {
        let source: SpecialDaySource = r#"
date_format = "2/1"

[[day]]
when = "18/3"
holiday = true
icon = "assets/anniversary.svg"
text = "((year - 2011))º Aniversario"
font = "courier"
size = 8.5

[[day]]
when = "((3rd sunday))/10"
text = "Día de la madre"
"#
        .parse()
        .unwrap();

        assert_eq!(source.date_format, "2/1");
        assert_eq!(source.days.len(), 2);
        assert!(source.days[0].holiday);
        assert_eq!(source.days[0].size, 8.5);
        assert_eq!(source.days[1].when, "((3rd sunday))/10");
        assert_eq!(source.days[1].icon, "");
        assert!(!source.days[1].holiday);
    }

    #[test]
    fn empty_document() {
        let source = SpecialDaySource::from_toml_str("").unwrap();
        assert_eq!(source, SpecialDaySource::default());
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            SpecialDaySource::from_toml_str("date_format = "),
            Err(Error::SourceDecode(_))
        ));
        // `when` is required
        assert!(matches!(
            SpecialDaySource::from_toml_str("[[day]]\ntext = \"x\"\n"),
            Err(Error::SourceDecode(_))
        ));
        assert!(matches!(
            SpecialDaySource::from_toml_str("[[day]]\nwhen = \"1/1\"\nholiday = \"yes\"\n"),
            Err(Error::SourceDecode(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = SpecialDaySource::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::SourceDecode(ref msg) if msg.contains("here.toml")));
    }
}
