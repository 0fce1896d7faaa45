//! Foundation input types for immui: per-frame input snapshots and the
//! pointer tracker that derives edges from consecutive snapshots.

mod input;
mod pointing;

pub use input::*;
pub use pointing::*;

pub mod prelude {
    pub use crate::input::{
        InputSnapshot, Key, Keys, PointerButton, PointerButtons, Touch, WheelDelta,
    };
    pub use crate::pointing::Pointing;
}
