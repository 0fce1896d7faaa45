//! Buttons and checkboxes.

use immui_core::{
    ColorRole, Context, Icon, Rect, Response, UiError, WidgetId, WidgetOptions,
};

/// A push button. Reports [`Response::SUBMIT`] on the frame it is pressed.
#[track_caller]
pub fn button(ctx: &mut Context, label: &str) -> Response {
    let id = ctx.caller_id();
    button_with(ctx, id, label, WidgetOptions::ALIGN_CENTER)
}

pub fn button_with(
    ctx: &mut Context,
    id: WidgetId,
    label: &str,
    opt: WidgetOptions,
) -> Response {
    ctx.wrap_error(|ctx| {
        ctx.widget(
            id,
            opt,
            |ctx, _, _| {
                Ok(if ctx.pointing().just_pressed() && ctx.focus() == id {
                    Response::SUBMIT
                } else {
                    Response::NONE
                })
            },
            |ctx, bounds| {
                ctx.draw_widget_frame(id, bounds, ColorRole::Button, opt)?;
                if !label.is_empty() {
                    ctx.draw_widget_text(label, bounds, ColorRole::Text, opt)?;
                }
                Ok(())
            },
        )
    })
}

/// A labelled check box bound to `state`. Reports [`Response::CHANGE`]
/// when a press flips it.
#[track_caller]
pub fn checkbox(ctx: &mut Context, label: &str, state: &mut bool) -> Response {
    let id = ctx.caller_id();
    checkbox_with(ctx, id, label, state)
}

pub fn checkbox_with(ctx: &mut Context, id: WidgetId, label: &str, state: &mut bool) -> Response {
    ctx.wrap_error(|ctx| {
        ctx.widget(
            id,
            WidgetOptions::NONE,
            |ctx, bounds, _| {
                let mut res = Response::NONE;
                if ctx.pointing().just_pressed() && ctx.focus() == id {
                    *state = !*state;
                    res |= Response::CHANGE;
                }
                draw_checkbox(ctx, id, bounds, label, *state)?;
                Ok(res)
            },
            |_, _| Ok(()),
        )
    })
}

fn draw_checkbox(
    ctx: &mut Context,
    id: WidgetId,
    bounds: Rect,
    label: &str,
    checked: bool,
) -> Result<(), UiError> {
    let side = bounds.height();
    let check = Rect::new(bounds.min.x, bounds.min.y, bounds.min.x + side, bounds.max.y);
    ctx.draw_widget_frame(id, check, ColorRole::Base, WidgetOptions::NONE)?;
    if checked {
        let color = ctx.style().color(ColorRole::Text);
        ctx.draw_icon(Icon::Check, check, color)?;
    }
    let text = Rect::new(bounds.min.x + side, bounds.min.y, bounds.max.x, bounds.max.y);
    ctx.draw_widget_text(label, text, ColorRole::Text, WidgetOptions::NONE)
}
