//! `SpecialDayStore`: every special day resolved for one configured year.

use std::collections::BTreeMap;
use std::path::Path;

use al_core::errors::Result;
use al_time::{Date, RenderConfig};

use crate::fields::resolve_fields;
use crate::key::SpecialDayKey;
use crate::model::SpecialDay;
use crate::source::SpecialDaySource;
use crate::when::DateKeyResolver;

/// Special days keyed by (month, day) for one year.
///
/// Immutable once built. Expression results depend on the configured year,
/// so a new store is built whenever the year changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecialDayStore {
    year: i32,
    days: BTreeMap<SpecialDayKey, SpecialDay>,
}

impl SpecialDayStore {
    /// A store with no special days.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            days: BTreeMap::new(),
        }
    }

    /// Resolve every record of `source` for `cfg`.
    ///
    /// Records are processed in document order; when two resolve to the same
    /// key, the later one replaces the earlier one. Records whose
    /// expressions ask to skip are left out.
    ///
    /// # Errors
    /// The first resolution or evaluation error. No partial store is
    /// returned.
    pub fn build(source: &SpecialDaySource, cfg: &RenderConfig) -> Result<Self> {
        let span = tracing::info_span!("special_days", year = cfg.year);
        let _enter = span.enter();

        let resolver = DateKeyResolver::new(&source.date_format);
        let mut store = Self::empty(cfg.year);

        for record in &source.days {
            let key = resolver.resolve(&record.when, cfg.year)?;
            let Some(day) = resolve_fields(record, key, cfg)? else {
                continue;
            };
            if let Some(previous) = store.insert(key, day) {
                tracing::debug!(
                    %key,
                    when = %record.when,
                    replaced = %previous.note.text,
                    "special day replaced by a later record"
                );
            }
        }

        tracing::info!(
            records = source.days.len(),
            entries = store.len(),
            "special days resolved"
        );
        Ok(store)
    }

    /// Read, decode and resolve the TOML source at `path`.
    pub fn load(path: impl AsRef<Path>, cfg: &RenderConfig) -> Result<Self> {
        let source = SpecialDaySource::from_path(path)?;
        Self::build(&source, cfg)
    }

    /// Insert `day` at `key`, returning the entry it replaced.
    pub fn insert(&mut self, key: SpecialDayKey, day: SpecialDay) -> Option<SpecialDay> {
        self.days.insert(key, day)
    }

    /// The configured year this store was resolved for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The special day at `key`.
    pub fn get(&self, key: SpecialDayKey) -> Option<&SpecialDay> {
        self.days.get(&key)
    }

    /// The special day falling on `date`'s month and day, whatever its year.
    pub fn at(&self, date: Date) -> Option<&SpecialDay> {
        self.get(SpecialDayKey::from_date(date))
    }

    /// Whether `key` has a special day.
    pub fn contains_key(&self, key: SpecialDayKey) -> bool {
        self.days.contains_key(&key)
    }

    /// Number of special days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in (month, day) order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpecialDayKey, &SpecialDay)> {
        self.days.iter()
    }
}
