//! Sliders and draggable number fields.

use immui_core::{ColorRole, Context, Rect, Response, UiError, WidgetId, WidgetOptions};

use super::number::{format_real, number_entry, parse_real, NumberEntry};

/// An integer slider over `low..=high`, snapping to multiples of `step`
/// when `step` is non-zero. Shift+press switches to typed entry.
#[track_caller]
pub fn slider(ctx: &mut Context, value: &mut i32, low: i32, high: i32, step: i32) -> Response {
    let id = ctx.caller_id();
    slider_with(ctx, id, value, low, high, step, WidgetOptions::ALIGN_CENTER)
}

pub fn slider_with(
    ctx: &mut Context,
    id: WidgetId,
    value: &mut i32,
    low: i32,
    high: i32,
    step: i32,
    opt: WidgetOptions,
) -> Response {
    ctx.wrap_error(|ctx| {
        let last = *value;
        match number_entry(ctx, id, || last.to_string())? {
            NumberEntry::Inactive => {}
            NumberEntry::Editing => return Ok(Response::NONE),
            NumberEntry::Committed(text) => {
                *value = (parse_real(&text) as i32).clamp(low, high.max(low));
                return Ok(changed(last != *value));
            }
        }
        ctx.widget(
            id,
            opt,
            |ctx, bounds, _| {
                // `high - low` and `x * range` can exceed i32.
                let (low64, high64) = (i64::from(low), i64::from(high.max(low)));
                let mut v = i64::from(*value);
                if ctx.focus() == id && ctx.pointing().pressed() {
                    let track = i64::from(bounds.width() - ctx.style().thumb_size);
                    if track > 0 {
                        let x = i64::from(ctx.pointing().position().x - bounds.min.x);
                        v = low64 + x * (high64 - low64) / track;
                    }
                    if step != 0 {
                        let step = i64::from(step);
                        v = v / step * step;
                    }
                }
                *value = i32::try_from(v.clamp(low64, high64)).unwrap_or(low);
                let fraction = fraction_of(
                    f64::from(*value) - f64::from(low),
                    f64::from(high) - f64::from(low),
                );
                draw_slider(ctx, id, bounds, fraction, &value.to_string(), opt)?;
                Ok(changed(last != *value))
            },
            |_, _| Ok(()),
        )
    })
}

/// A floating-point slider over `low..=high`, snapping to multiples of
/// `step` when it is non-zero and showing `digits` decimals.
#[track_caller]
pub fn slider_f(
    ctx: &mut Context,
    value: &mut f64,
    low: f64,
    high: f64,
    step: f64,
    digits: usize,
) -> Response {
    let id = ctx.caller_id();
    slider_f_with(ctx, id, value, low, high, step, digits, WidgetOptions::ALIGN_CENTER)
}

#[allow(clippy::too_many_arguments)]
pub fn slider_f_with(
    ctx: &mut Context,
    id: WidgetId,
    value: &mut f64,
    low: f64,
    high: f64,
    step: f64,
    digits: usize,
    opt: WidgetOptions,
) -> Response {
    ctx.wrap_error(|ctx| {
        let last = *value;
        match number_entry(ctx, id, || format_real(last))? {
            NumberEntry::Inactive => {}
            NumberEntry::Editing => return Ok(Response::NONE),
            NumberEntry::Committed(text) => {
                *value = parse_real(&text).clamp(low, high.max(low));
                return Ok(changed(last != *value));
            }
        }
        ctx.widget(
            id,
            opt,
            |ctx, bounds, _| {
                let mut v = *value;
                if ctx.focus() == id && ctx.pointing().pressed() {
                    let track = f64::from(bounds.width() - ctx.style().thumb_size);
                    if track > 0.0 {
                        let x = f64::from(ctx.pointing().position().x - bounds.min.x);
                        v = low + x * (high - low) / track;
                    }
                    if step != 0.0 {
                        v = (v / step).round() * step;
                    }
                }
                *value = v.clamp(low, high.max(low));
                let fraction = fraction_of(*value - low, high - low);
                let text = format!("{:.*}", digits, *value);
                draw_slider(ctx, id, bounds, fraction, &text, opt)?;
                Ok(changed(last != *value))
            },
            |_, _| Ok(()),
        )
    })
}

/// A number changed by dragging horizontally, `step` per unit of pointer
/// travel. Shift+press switches to typed entry.
#[track_caller]
pub fn number_field(ctx: &mut Context, value: &mut f64, step: f64, digits: usize) -> Response {
    let id = ctx.caller_id();
    number_field_with(ctx, id, value, step, digits, WidgetOptions::ALIGN_CENTER)
}

pub fn number_field_with(
    ctx: &mut Context,
    id: WidgetId,
    value: &mut f64,
    step: f64,
    digits: usize,
    opt: WidgetOptions,
) -> Response {
    ctx.wrap_error(|ctx| {
        let last = *value;
        match number_entry(ctx, id, || format_real(last))? {
            NumberEntry::Inactive => {}
            NumberEntry::Editing => return Ok(Response::NONE),
            NumberEntry::Committed(text) => {
                *value = parse_real(&text);
                return Ok(changed(last != *value));
            }
        }
        ctx.widget(
            id,
            opt,
            |ctx, bounds, _| {
                if ctx.focus() == id && ctx.pointing().pressed() {
                    *value += f64::from(ctx.pointing().delta().x) * step;
                }
                ctx.draw_widget_frame(id, bounds, ColorRole::Base, opt)?;
                let text = format!("{:.*}", digits, *value);
                ctx.draw_widget_text(&text, bounds, ColorRole::Text, opt)?;
                Ok(changed(last != *value))
            },
            |_, _| Ok(()),
        )
    })
}

fn changed(changed: bool) -> Response {
    if changed {
        Response::CHANGE
    } else {
        Response::NONE
    }
}

fn fraction_of(offset: f64, range: f64) -> f64 {
    if range > 0.0 {
        offset / range
    } else {
        0.0
    }
}

fn draw_slider(
    ctx: &mut Context,
    id: WidgetId,
    bounds: Rect,
    fraction: f64,
    text: &str,
    opt: WidgetOptions,
) -> Result<(), UiError> {
    ctx.draw_widget_frame(id, bounds, ColorRole::Base, opt)?;
    let thumb_width = ctx.style().thumb_size;
    let x = bounds.min.x + (fraction * f64::from(bounds.width() - thumb_width)) as i32;
    let thumb = Rect::new(x, bounds.min.y, x + thumb_width, bounds.max.y);
    ctx.draw_widget_frame(id, thumb, ColorRole::Button, opt)?;
    ctx.draw_widget_text(text, bounds, ColorRole::Text, opt)
}
