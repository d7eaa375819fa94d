//! # almanac
//!
//! Month calendar grids annotated with recurring special days whose dates,
//! notes and icons are resolved for each configured year.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `al-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::core::Handle;
//! use almanac::grid::{CalendarGrid, RendererRegistry};
//! use almanac::special::{SpecialDaySource, SpecialDayStore};
//! use almanac::time::{parse_week_start, RenderConfig};
//!
//! let source: SpecialDaySource = r#"
//! date_format = "2/1"
//!
//! [[day]]
//! when = "18/3"
//! text = "((year - 2011))º Aniversario De Casados"
//! "#
//! .parse()?;
//!
//! let cfg = RenderConfig::new(2024, 3, parse_week_start("monday")?)?;
//! let store = Handle::new(SpecialDayStore::build(&source, &cfg)?);
//! let grids = CalendarGrid::for_config(&cfg, store)?;
//!
//! let mut out = Vec::new();
//! RendererRegistry::with_defaults()
//!     .get("text")?
//!     .render_year(&grids, &mut out)?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains(" 18: 13º Aniversario De Casados"));
//! # Ok::<(), almanac::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, the shared `Handle`, and logging setup.
pub use al_core as core;

/// Dates, weekdays, months, date layouts and render configuration.
pub use al_time as time;

/// Special-day sources, resolution and the per-year store.
pub use al_special as special;

/// Calendar grids and renderers.
pub use al_grid as grid;
