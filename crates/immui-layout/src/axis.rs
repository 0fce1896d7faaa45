//! Axis definitions for flow layouts.

use immui_graphics::{Point, Size};

/// Identifies the direction a declared extent is resolved along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Column widths.
    Horizontal,
    /// Row heights.
    Vertical,
}

impl Axis {
    /// Returns true if this axis is horizontal.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this axis is vertical.
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Component of `point` along this axis.
    pub fn of_point(self, point: Point) -> i32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Component of `size` along this axis.
    pub fn of_size(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}
