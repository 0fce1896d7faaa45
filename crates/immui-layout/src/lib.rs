//! Row/grid flow layout for immui
//!
//! A [`FlowLayout`] is one entry of the layout stack: it hands out the
//! rectangle of the next widget from a declared column/row grid
//! and measures how far the content extends so containers can scroll.

mod axis;
mod flow;

pub use axis::*;
pub use flow::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::flow::{FlowLayout, LayoutMetrics};
}
