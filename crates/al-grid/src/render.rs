//! Renderers and the registry that selects them by name.

use std::collections::BTreeMap;
use std::io::Write;

use al_core::errors::{Error, Result};

use crate::grid::{CalendarGrid, Day};

/// Turns calendar grids into output.
pub trait Renderer {
    /// Registry name (matched case-insensitively).
    fn name(&self) -> &str;

    /// Render one month.
    fn render_month(&self, grid: &CalendarGrid, out: &mut dyn Write) -> Result<()>;

    /// Render several months in order. Defaults to one month after another,
    /// separated by a blank line.
    fn render_year(&self, grids: &[CalendarGrid], out: &mut dyn Write) -> Result<()> {
        for (i, grid) in grids.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.render_month(grid, out)?;
        }
        Ok(())
    }
}

/// Named renderers, built once at startup and passed where needed.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: BTreeMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TextRenderer::default());
        registry
    }

    /// Register `renderer` under its name, replacing any previous one.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        let name = renderer.name().trim().to_lowercase();
        if self.renderers.insert(name.clone(), Box::new(renderer)).is_some() {
            tracing::debug!(%name, "renderer replaced");
        }
    }

    /// The renderer registered as `name`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] listing the known names.
    pub fn get(&self, name: &str) -> Result<&dyn Renderer> {
        self.renderers
            .get(&name.trim().to_lowercase())
            .map(|r| &**r)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown renderer {name:?} (known: {})",
                    self.names().collect::<Vec<_>>().join(", ")
                ))
            })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Plain-text month tables.
///
/// ```text
/// March 2024
/// Sun Mon Tue Wed Thu Fri Sat
///                       1   2*
///   3*  4   5   6   7   8   9*
/// ...
///  18: 13º Aniversario De Casados
/// ```
///
/// Holidays carry a trailing `*`; notes of the month's special days follow
/// the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Print the numbers of leading/trailing days from adjacent months
    /// instead of leaving them blank.
    pub show_extra_days: bool,
}

impl TextRenderer {
    fn cell(&self, grid: &CalendarGrid, day: &Day) -> String {
        if !day.is_current_month && !self.show_extra_days {
            return "    ".to_string();
        }
        let mark = if grid.is_holiday(day) { '*' } else { ' ' };
        format!("{:>3}{mark}", day.day_number)
    }
}

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn render_month(&self, grid: &CalendarGrid, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} {}", grid.month().long_name(), grid.year())?;

        let header: String = grid
            .column_weekdays()
            .iter()
            .map(|w| format!("{:<4}", w.short_name()))
            .collect();
        writeln!(out, "{}", header.trim_end())?;

        for week in grid.weeks() {
            let line: String = week.iter().map(|day| self.cell(grid, day)).collect();
            writeln!(out, "{}", line.trim_end())?;
        }

        for day in grid.days().filter(|d| d.is_current_month) {
            if let Some(note) = grid.note(day).filter(|n| !n.text.is_empty()) {
                writeln!(out, "{:>3}: {}", day.day_number, note.text)?;
            }
        }
        Ok(())
    }
}
