//! Flow cursor that places widgets left to right, row after row.

use immui_graphics::{Point, Rect, Size};

use crate::axis::Axis;

/// Sentinel for "nothing laid out yet" in the running max extent.
const NO_EXTENT: i32 = -0x100_0000;

/// Theme-derived sizes the flow layout needs to resolve declared extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Width used for columns declared as `0`.
    pub default_width: i32,
    /// Height used for rows declared as `0` and for single-row mode.
    pub default_height: i32,
    /// Gap inserted between consecutive cells and rows.
    pub spacing: i32,
}

/// One entry of the layout stack.
///
/// Declared extents follow the same rule on both axes:
///
/// * `n > 0` is exactly `n` units,
/// * `0` is the default control size from [`LayoutMetrics`],
/// * `n < 0` is flexible: `n + (body extent - cursor + 1)`, evaluated at the
///   current cursor. The cursor advances after each placement, so flexible
///   columns are filled greedily from left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLayout {
    body: Rect,
    position: Point,
    next_row_y: i32,
    widths: Vec<i32>,
    heights: Vec<i32>,
    item_index: usize,
    indent: i32,
    max: Point,
}

impl FlowLayout {
    /// Creates a layout over `body`, shifted by the container's scroll offset.
    pub fn new(body: Rect, scroll: Point) -> Self {
        let mut layout = Self {
            body: body.translate(Point::new(-scroll.x, -scroll.y)),
            position: Point::ZERO,
            next_row_y: 0,
            widths: Vec::new(),
            heights: Vec::new(),
            item_index: 0,
            indent: 0,
            max: Point::new(NO_EXTENT, NO_EXTENT),
        };
        layout.set_grid(&[0], &[]);
        layout
    }

    /// Declares the column widths and row heights used from now on.
    ///
    /// An empty `heights` list selects single-row mode: every row uses the
    /// default control height and the grid repeats after `widths.len()` items.
    pub fn set_grid(&mut self, widths: &[i32], heights: &[i32]) {
        self.widths.clear();
        self.widths.extend_from_slice(widths);
        self.heights.clear();
        self.heights.extend_from_slice(heights);
        self.item_index = 0;
        self.start_row();
    }

    /// Returns the rectangle of the next widget in absolute coordinates.
    pub fn next_rect(&mut self, metrics: &LayoutMetrics) -> Rect {
        let columns = self.columns();
        if self.item_index == self.items_per_cycle() {
            // Reapply the same grid so loops can keep calling without redeclaring it.
            self.item_index = 0;
            self.start_row();
        } else if self.item_index > 0 && self.item_index % columns == 0 {
            self.start_row();
        }

        let column = self.item_index % columns;
        let row = self.item_index / columns;
        let declared_width = self.widths.get(column).copied().unwrap_or(0);
        let declared_height = self.heights.get(row).copied().unwrap_or(0);
        let size = Size::new(
            self.resolve(Axis::Horizontal, declared_width, metrics),
            self.resolve(Axis::Vertical, declared_height, metrics),
        );
        let local = Rect::from_origin_size(self.position, size);

        self.item_index += 1;
        self.position.x += size.width + metrics.spacing;
        self.next_row_y = self.next_row_y.max(local.max.y + metrics.spacing);

        let rect = local.translate(self.body.min);
        self.max = self.max.max(rect.max);
        rect
    }

    /// Folds the extent consumed by a nested layout back into this one.
    pub fn absorb_child(&mut self, child: &FlowLayout) {
        self.position.x = self
            .position
            .x
            .max(child.position.x + child.body.min.x - self.body.min.x);
        self.next_row_y = self
            .next_row_y
            .max(child.next_row_y + child.body.min.y - self.body.min.y);
        self.max = self.max.max(child.max);
    }

    /// Extent of everything laid out so far, measured from the body origin.
    pub fn content_size(&self) -> Size {
        Size::new(
            (self.max.x - self.body.min.x).max(0),
            (self.max.y - self.body.min.y).max(0),
        )
    }

    /// Scroll-adjusted body rectangle.
    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn indent(&self) -> i32 {
        self.indent
    }

    pub fn set_indent(&mut self, indent: i32) {
        self.indent = indent;
    }

    /// Cursor position relative to the body origin.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn next_row_y(&self) -> i32 {
        self.next_row_y
    }

    /// Number of placements before the declared grid repeats.
    pub fn items_per_cycle(&self) -> usize {
        self.columns() * self.heights.len().max(1)
    }

    fn columns(&self) -> usize {
        self.widths.len().max(1)
    }

    fn start_row(&mut self) {
        self.position = Point::new(self.indent, self.next_row_y);
    }

    fn resolve(&self, axis: Axis, declared: i32, metrics: &LayoutMetrics) -> i32 {
        if declared > 0 {
            return declared;
        }
        if declared == 0 {
            return match axis {
                Axis::Horizontal => metrics.default_width,
                Axis::Vertical => metrics.default_height,
            };
        }
        let available = axis.of_size(self.body.size());
        let cursor = axis.of_point(self.position);
        (declared + available - cursor + 1).max(0)
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
