//! Static text.

use immui_core::{ColorRole, Context, UiError, WidgetId, WidgetOptions};

/// A single line of text, clipped to its cell.
pub fn label(ctx: &mut Context, text: &str) {
    ctx.wrap_error(|ctx| {
        ctx.widget(
            WidgetId::EMPTY,
            WidgetOptions::NONE,
            |_, _, _| Ok(()),
            |ctx, bounds| ctx.draw_widget_text(text, bounds, ColorRole::Text, WidgetOptions::NONE),
        )
    })
}

/// A paragraph that wraps at word boundaries to the width of its cell.
/// Explicit newlines start new lines.
pub fn text(ctx: &mut Context, text: &str) {
    let color = ctx.style().color(ColorRole::Text);
    ctx.layout_column(|ctx, cell| {
        let line_height = ctx.line_height();
        ctx.set_grid_layout(&[-1], &[line_height]);
        let lines = {
            let measure = |s: &str| ctx.text_width(s);
            wrap_lines(text, cell.width(), &measure)
        };
        for line in lines {
            let drawn: Result<(), UiError> = ctx.widget(
                WidgetId::EMPTY,
                WidgetOptions::NONE,
                |_, _, _| Ok(()),
                |ctx, bounds| ctx.draw_text(line, bounds.min, color),
            );
            if let Err(err) = drawn {
                ctx.latch(err);
                break;
            }
        }
    })
}

/// Splits `text` into lines no wider than `width` where possible.
///
/// Words are separated by single spaces. A word wider than `width` gets a
/// line of its own. A trailing newline does not add an empty line.
pub fn wrap_lines<'t>(text: &'t str, width: i32, measure: &dyn Fn(&str) -> i32) -> Vec<&'t str> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    let space = measure(" ");
    for paragraph in body.split('\n') {
        let mut line_start = 0;
        let mut line_end = 0;
        let mut line_width = 0;
        let mut word_start = 0;
        while word_start <= paragraph.len() {
            let word_end = paragraph[word_start..]
                .find(' ')
                .map_or(paragraph.len(), |offset| word_start + offset);
            let word_width = measure(&paragraph[word_start..word_end]);
            if line_width + word_width > width && line_end != line_start {
                lines.push(&paragraph[line_start..line_end]);
                line_start = word_start;
                line_width = 0;
            }
            line_width += word_width + space;
            line_end = word_end;
            word_start = word_end + 1;
        }
        lines.push(&paragraph[line_start..line_end]);
    }
    lines
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
