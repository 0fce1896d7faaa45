//! Collapsible headers and tree nodes.
//!
//! Expansion state lives in the enclosing container's toggle set: a node
//! is expanded when its id is toggled, or when it is not toggled and the
//! node starts expanded.

use immui_core::{
    ColorRole, Context, Icon, Rect, Response, UiError, WidgetId, WidgetOptions,
};

/// A full-width header that shows `f` while expanded. Reports
/// [`Response::ACTIVE`] while expanded.
#[track_caller]
pub fn header(
    ctx: &mut Context,
    label: &str,
    expanded: bool,
    f: impl FnOnce(&mut Context),
) -> Response {
    let id = ctx.caller_id();
    let opt = if expanded {
        WidgetOptions::EXPANDED
    } else {
        WidgetOptions::NONE
    };
    header_with(ctx, id, label, opt, f)
}

pub fn header_with(
    ctx: &mut Context,
    id: WidgetId,
    label: &str,
    opt: WidgetOptions,
    f: impl FnOnce(&mut Context),
) -> Response {
    ctx.wrap_error(|ctx| {
        let res = collapsible(ctx, id, label, false, opt)?;
        if res.active() {
            f(ctx);
        }
        Ok(res)
    })
}

/// A tree node, collapsed at first. Its content is indented and declared
/// in a scope of its own, so nested nodes can reuse call sites.
#[track_caller]
pub fn tree_node(ctx: &mut Context, label: &str, f: impl FnOnce(&mut Context)) -> Response {
    let id = ctx.caller_id();
    tree_node_with(ctx, id, label, WidgetOptions::NONE, f)
}

pub fn tree_node_with(
    ctx: &mut Context,
    id: WidgetId,
    label: &str,
    opt: WidgetOptions,
    f: impl FnOnce(&mut Context),
) -> Response {
    ctx.wrap_error(|ctx| {
        let res = collapsible(ctx, id, label, true, opt)?;
        if res.active() {
            let indent = ctx.style().indent;
            ctx.indent(indent)?;
            ctx.push_id_scope(id);
            f(ctx);
            ctx.pop_id_scope()?;
            ctx.indent(-indent)?;
        }
        Ok(res)
    })
}

fn collapsible(
    ctx: &mut Context,
    id: WidgetId,
    label: &str,
    tree: bool,
    opt: WidgetOptions,
) -> Result<Response, UiError> {
    let toggled = ctx.is_toggled(id)?;
    let expanded = toggled != opt.contains(WidgetOptions::EXPANDED);
    ctx.set_grid_layout(&[-1], &[]);
    ctx.widget(
        id,
        WidgetOptions::NONE,
        |ctx, _, _| {
            if ctx.pointing().just_pressed() && ctx.focus() == id {
                ctx.toggle(id)?;
            }
            Ok(())
        },
        |ctx, bounds| draw_collapsible(ctx, id, bounds, label, tree, expanded),
    )?;
    Ok(if expanded {
        Response::ACTIVE
    } else {
        Response::NONE
    })
}

fn draw_collapsible(
    ctx: &mut Context,
    id: WidgetId,
    bounds: Rect,
    label: &str,
    tree: bool,
    expanded: bool,
) -> Result<(), UiError> {
    if !tree {
        ctx.draw_widget_frame(id, bounds, ColorRole::Button, WidgetOptions::NONE)?;
    } else if ctx.hover() == id {
        ctx.draw_frame(bounds, ColorRole::ButtonHover)?;
    }
    let side = bounds.height();
    let icon = if expanded {
        Icon::Expanded
    } else {
        Icon::Collapsed
    };
    let color = ctx.style().color(ColorRole::Text);
    ctx.draw_icon(
        icon,
        Rect::new(bounds.min.x, bounds.min.y, bounds.min.x + side, bounds.max.y),
        color,
    )?;
    let text = Rect::new(
        bounds.min.x + side - ctx.style().padding,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
    );
    ctx.draw_widget_text(label, text, ColorRole::Text, WidgetOptions::NONE)
}
