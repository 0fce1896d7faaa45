use immui_graphics::Point;

use crate::input::{InputSnapshot, TouchId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PointingState {
    position: Point,
    down: bool,
    touch: Option<TouchId>,
}

impl PointingState {
    fn from_snapshot(snapshot: &InputSnapshot) -> Self {
        Self {
            position: snapshot.pointing_position(),
            down: snapshot.pointing_down(),
            touch: snapshot.touch.map(|touch| touch.id),
        }
    }
}

/// Tracks the primary pointing device across frames.
///
/// Fed one snapshot per frame; press/release edges and the movement delta
/// compare the current snapshot with the previous one.
#[derive(Clone, Debug, Default)]
pub struct Pointing {
    current: PointingState,
    previous: PointingState,
}

impl Pointing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, snapshot: &InputSnapshot) {
        self.previous = self.current;
        self.current = PointingState::from_snapshot(snapshot);
    }

    pub fn position(&self) -> Point {
        self.current.position
    }

    pub fn pressed(&self) -> bool {
        self.current.down
    }

    pub fn just_pressed(&self) -> bool {
        self.current.down && !self.previous.down
    }

    pub fn just_released(&self) -> bool {
        !self.current.down && self.previous.down
    }

    /// Movement since the previous frame. A touch that just started (or a
    /// switch between touch and mouse) reports no movement.
    pub fn delta(&self) -> Point {
        if self.current.touch != self.previous.touch {
            return Point::ZERO;
        }
        self.current.position - self.previous.position
    }
}

#[cfg(test)]
#[path = "tests/pointing_tests.rs"]
mod tests;
