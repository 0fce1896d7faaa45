//! Layout stack plumbing between the context and [`FlowLayout`].

use immui_graphics::{Point, Rect};
use immui_layout::{FlowLayout, LayoutMetrics};

use crate::context::Context;
use crate::error::{StackKind, UiError};

impl Context {
    pub(crate) fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            default_width: self.style().default_width,
            default_height: self.style().control_height(self.line_height()),
            spacing: self.style().spacing,
        }
    }

    pub(crate) fn push_layout(&mut self, body: Rect, scroll: Point) {
        self.layout_stack.push(FlowLayout::new(body, scroll));
    }

    fn pop_layout(&mut self) -> Result<FlowLayout, UiError> {
        self.layout_stack.pop().ok_or(UiError::EmptyStack {
            stack: StackKind::Layout,
        })
    }

    /// Pops a container's body layout, recording how far its content reached.
    pub(crate) fn pop_container_layout(&mut self) -> Result<(), UiError> {
        let layout = self.pop_layout()?;
        self.current_container_mut()?.layout.content_size = layout.content_size();
        Ok(())
    }

    /// The innermost layout.
    pub fn layout(&self) -> Result<&FlowLayout, UiError> {
        self.layout_stack.last().ok_or(UiError::EmptyStack {
            stack: StackKind::Layout,
        })
    }

    pub fn layout_mut(&mut self) -> Result<&mut FlowLayout, UiError> {
        self.layout_stack.last_mut().ok_or(UiError::EmptyStack {
            stack: StackKind::Layout,
        })
    }

    /// Rectangle of the next widget in the innermost layout.
    pub fn next_rect(&mut self) -> Result<Rect, UiError> {
        let metrics = self.layout_metrics();
        Ok(self.layout_mut()?.next_rect(&metrics))
    }

    /// Declares column widths and row heights for the following widgets.
    ///
    /// `n > 0` is exact, `0` is the theme default and `n < 0` fills the
    /// remaining space minus `|n| - 1`. An empty `heights` keeps one row of
    /// default height.
    pub fn set_grid_layout(&mut self, widths: &[i32], heights: &[i32]) {
        self.wrap_error(|ctx| {
            ctx.layout_mut()?.set_grid(widths, heights);
            Ok(())
        })
    }

    /// Takes the next cell of the current layout and lays out subsequent
    /// widgets inside it until [`Context::exit_child_layout`].
    pub fn enter_child_layout(&mut self) -> Result<Rect, UiError> {
        let cell = self.next_rect()?;
        self.push_layout(cell, Point::ZERO);
        Ok(cell)
    }

    /// Pops a child layout and folds its extent into the parent.
    pub fn exit_child_layout(&mut self) -> Result<(), UiError> {
        let child = self.pop_layout()?;
        self.layout_mut()?.absorb_child(&child);
        Ok(())
    }

    /// Runs `f` inside a nested layout occupying the next cell.
    pub fn layout_column<R: Default>(&mut self, f: impl FnOnce(&mut Context, Rect) -> R) -> R {
        self.wrap_error(|ctx| {
            let cell = ctx.enter_child_layout()?;
            let result = f(ctx, cell);
            ctx.exit_child_layout()?;
            Ok(result)
        })
    }

    /// Shifts the start of following rows by `delta`.
    /// Does nothing once an error is latched.
    pub fn indent(&mut self, delta: i32) -> Result<(), UiError> {
        if self.has_error() {
            return Ok(());
        }
        let layout = self.layout_mut()?;
        let indent = layout.indent() + delta;
        layout.set_indent(indent);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
