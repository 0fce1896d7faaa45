//! Integer geometry primitives.

use std::ops::{Add, Sub};

/// A position in device-independent units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns true if the point lies inside `rect` (max edges exclusive).
    pub fn is_in(self, rect: Rect) -> bool {
        rect.contains(self)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis aligned rectangle spanning `min` (inclusive) to `max` (exclusive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Clip rectangle that never clips anything in practice.
    pub const UNCLIPPED: Rect = Rect {
        min: Point::ZERO,
        max: Point {
            x: 0x100_0000,
            y: 0x100_0000,
        },
    };

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point { x: x0, y: y0 },
            max: Point { x: x1, y: y1 },
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + size.width, origin.y + size.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    /// Returns true if `self` lies entirely inside `other`. An empty rectangle is inside anything.
    pub fn is_inside(&self, other: Rect) -> bool {
        if self.is_empty() {
            return true;
        }
        other.min.x <= self.min.x
            && self.max.x <= other.max.x
            && other.min.y <= self.min.y
            && self.max.y <= other.max.y
    }

    /// Largest rectangle contained by both; [`Rect::ZERO`] when they do not overlap.
    pub fn intersect(&self, other: Rect) -> Rect {
        let r = Rect {
            min: self.min.max(other.min),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() {
            Rect::ZERO
        } else {
            r
        }
    }

    pub fn overlaps(&self, other: Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Shrinks every edge by `n`. A dimension smaller than `2 * n` collapses to its midpoint.
    pub fn inset(&self, n: i32) -> Rect {
        let mut r = *self;
        if self.width() < 2 * n {
            r.min.x = (self.min.x + self.max.x) / 2;
            r.max.x = r.min.x;
        } else {
            r.min.x += n;
            r.max.x -= n;
        }
        if self.height() < 2 * n {
            r.min.y = (self.min.y + self.max.y) / 2;
            r.max.y = r.min.y;
        } else {
            r.min.y += n;
            r.max.y -= n;
        }
        r
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
