//! Numeric text entry shared by sliders and number fields.
//!
//! A shift+press on a hovered numeric widget swaps it for a text field
//! holding the current value. The typed text is committed on submit or
//! when the field loses focus.

use immui_core::{Context, Key, UiError, WidgetId, WidgetOptions};

use super::text_field::text_field_raw;

pub(crate) enum NumberEntry {
    /// `id` is not in text entry; declare the normal widget.
    Inactive,
    /// The text field was declared and is still being edited.
    Editing,
    /// Editing ended this frame with the given text.
    Committed(String),
}

pub(crate) fn number_entry(
    ctx: &mut Context,
    id: WidgetId,
    current: impl FnOnce() -> String,
) -> Result<NumberEntry, UiError> {
    if ctx.pointing().just_pressed() && ctx.input().is_key_down(Key::Shift) && ctx.hover() == id {
        let text = current();
        log::debug!("widget {id} entered text entry with {text:?}");
        ctx.sync_text(id, &text);
        ctx.begin_number_edit(id, text);
    }
    let Some(mut buf) = ctx.take_number_edit(id) else {
        return Ok(NumberEntry::Inactive);
    };
    let res = text_field_raw(ctx, id, &mut buf, WidgetOptions::NONE)?;
    if res.submitted() || ctx.focus() != id {
        return Ok(NumberEntry::Committed(buf));
    }
    ctx.begin_number_edit(id, buf);
    Ok(NumberEntry::Editing)
}

/// Parses committed text, treating anything unparsable as zero.
pub(crate) fn parse_real(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Formats `value` with three significant digits, switching to an
/// exponent outside `1e-4..1e3` the way C's `%.3g` does.
pub(crate) fn format_real(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let scientific = format!("{value:.2e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..3).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }
    let decimals = (2 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
#[path = "tests/number_tests.rs"]
mod tests;
