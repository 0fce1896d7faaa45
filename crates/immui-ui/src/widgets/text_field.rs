//! Single-line text entry backed by the text-input collaborator.

use immui_core::{
    ColorRole, Context, Key, Point, Rect, Response, UiError, WidgetId, WidgetOptions,
};

/// A text field editing `buf`.
///
/// Reports [`Response::CHANGE`] when `buf` changed this frame and
/// [`Response::SUBMIT`] on Enter or when the field loses focus.
#[track_caller]
pub fn text_field(ctx: &mut Context, buf: &mut String) -> Response {
    let id = ctx.caller_id();
    text_field_with(ctx, id, buf, WidgetOptions::NONE)
}

pub fn text_field_with(
    ctx: &mut Context,
    id: WidgetId,
    buf: &mut String,
    opt: WidgetOptions,
) -> Response {
    ctx.wrap_error(|ctx| text_field_raw(ctx, id, buf, opt))
}

pub(crate) fn text_field_raw(
    ctx: &mut Context,
    id: WidgetId,
    buf: &mut String,
    opt: WidgetOptions,
) -> Result<Response, UiError> {
    ctx.widget(
        id,
        opt | WidgetOptions::HOLD_FOCUS,
        |ctx, bounds, was_focused| {
            let mut res = Response::NONE;
            if ctx.focus() == id {
                let previous = buf.clone();
                let caret = Point::new(
                    bounds.min.x + ctx.style().padding + ctx.text_width(buf),
                    bounds.min.y + ctx.line_height(),
                );
                let handled = ctx.edit_text(id, buf, caret)?;
                if !handled {
                    if ctx.input().is_key_pressed(Key::Backspace) && buf.pop().is_some() {
                        ctx.sync_text(id, buf);
                    }
                    if ctx.input().is_key_pressed(Key::Enter) {
                        res |= Response::SUBMIT;
                    }
                }
                if *buf != previous {
                    res |= Response::CHANGE;
                }
            } else {
                ctx.sync_text(id, buf);
                if was_focused {
                    res |= Response::SUBMIT;
                }
            }
            draw_text_field(ctx, id, bounds, buf, opt)?;
            Ok(res)
        },
        |_, _| Ok(()),
    )
}

fn draw_text_field(
    ctx: &mut Context,
    id: WidgetId,
    bounds: Rect,
    buf: &str,
    opt: WidgetOptions,
) -> Result<(), UiError> {
    ctx.draw_widget_frame(id, bounds, ColorRole::Base, opt)?;
    if ctx.focus() != id {
        return ctx.draw_widget_text(buf, bounds, ColorRole::Text, opt);
    }
    // Keep the caret visible by scrolling long text to the left.
    let color = ctx.style().color(ColorRole::Text);
    let padding = ctx.style().padding;
    let text_width = ctx.text_width(buf);
    let line_height = ctx.line_height();
    let x = bounds.min.x + (bounds.width() - padding - text_width - 1).min(padding);
    let y = bounds.min.y + (bounds.height() - line_height) / 2;
    ctx.push_clip_rect(bounds)?;
    let drawn = ctx
        .draw_text(buf, Point::new(x, y), color)
        .and_then(|()| {
            ctx.draw_rect(
                Rect::new(x + text_width, y, x + text_width + 1, y + line_height),
                color,
            )
        });
    ctx.pop_clip_rect()?;
    drawn
}
