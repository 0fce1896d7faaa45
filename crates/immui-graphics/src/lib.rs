//! Pure math/data for drawing & units in immui
//!
//! This crate contains the integer geometry primitives and color
//! definitions shared by every other immui crate. Coordinates are in
//! device-independent units.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
