//! Resolution of a record's templated fields for one configured year.

use al_core::errors::{Error, Result};
use al_time::date::days_in_month;
use al_time::{Date, RenderConfig};

use crate::expr::{evaluate_template, EvalContext, Evaluated};
use crate::key::SpecialDayKey;
use crate::model::{Note, SpecialDay, SpecialDayRecord};

/// Resolve `record`, already keyed at `key`, for `cfg.year`.
///
/// Text, icon and font are evaluated in that order, always all three, so a
/// syntax error in a later field is reported even when an earlier one asked
/// to skip. Returns `Ok(None)` when the record is skipped for this year.
///
/// # Errors
/// The first [`Error::ExpressionSyntax`] raised by any field, prefixed with
/// the field name and the record's `when`.
pub fn resolve_fields(
    record: &SpecialDayRecord,
    key: SpecialDayKey,
    cfg: &RenderConfig,
) -> Result<Option<SpecialDay>> {
    if key.day > days_in_month(cfg.year, key.month) {
        tracing::debug!(
            when = %record.when,
            %key,
            year = cfg.year,
            "skipping special day: date does not exist this year"
        );
        return Ok(None);
    }

    let date = Date::from_ymd(cfg.year, key.month, key.day)?;
    let ctx = EvalContext::new(date, cfg);

    let text = evaluate_field("text", &record.text, record, &ctx)?;
    let icon = evaluate_field("icon", &record.icon, record, &ctx)?;
    let font = evaluate_field("font", &record.font, record, &ctx)?;

    if text.skip || icon.skip || font.skip {
        tracing::debug!(
            when = %record.when,
            %key,
            year = cfg.year,
            text = text.skip,
            icon = icon.skip,
            font = font.skip,
            "skipping special day: expression evaluated to zero or less"
        );
        return Ok(None);
    }

    Ok(Some(SpecialDay {
        date,
        holiday: record.holiday,
        icon: icon.text,
        note: Note {
            text: text.text,
            font: font.text,
            size: record.size,
        },
    }))
}

fn evaluate_field(
    field: &str,
    template: &str,
    record: &SpecialDayRecord,
    ctx: &EvalContext,
) -> Result<Evaluated> {
    evaluate_template(template, ctx).map_err(|err| match err {
        Error::ExpressionSyntax(msg) => {
            Error::ExpressionSyntax(format!("{field} of {:?}: {msg}", record.when))
        }
        other => other,
    })
}
