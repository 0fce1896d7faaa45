use immui_graphics::Point;

pub type TouchId = u64;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Keys the engine and the built-in widgets react to.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Shift = 0,
    Control = 1,
    Alt = 2,
    Backspace = 3,
    Enter = 4,
    Tab = 5,
    Escape = 6,
    Delete = 7,
    Left = 8,
    Right = 9,
    Home = 10,
    End = 11,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keys(u16);

impl Keys {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, key: Key) -> Self {
        self.insert(key);
        self
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= 1 << (key as u8);
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !(1 << (key as u8));
    }

    pub fn contains(&self, key: Key) -> bool {
        (self.0 & (1 << (key as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Keys {
    fn default() -> Self {
        Self::NONE
    }
}

/// An active touch. While present it stands in for the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Touch {
    pub id: TouchId,
    pub position: Point,
}

/// Wheel movement accumulated since the previous frame, in notches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

impl WheelDelta {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Everything an input source reports for one frame.
///
/// `keys_down` is the held set; `keys_pressed` holds keys that went down
/// (or auto-repeated) since the previous snapshot. Pointer edges are not
/// part of the snapshot, the engine derives them with [`crate::Pointing`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: Point,
    pub buttons: PointerButtons,
    pub touch: Option<Touch>,
    pub wheel: WheelDelta,
    pub keys_down: Keys,
    pub keys_pressed: Keys,
    pub text: String,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer(mut self, position: Point) -> Self {
        self.pointer = position;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.buttons.insert(button);
        self
    }

    pub fn with_touch(mut self, touch: Touch) -> Self {
        self.touch = Some(touch);
        self
    }

    pub fn with_wheel(mut self, wheel: WheelDelta) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn with_key_down(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self
    }

    pub fn with_key_pressed(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self.keys_pressed.insert(key);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push_str(&text.into());
        self
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(key)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(key)
    }

    /// Position the engine treats as the pointer: the touch if one is
    /// active, the mouse cursor otherwise.
    pub fn pointing_position(&self) -> Point {
        match self.touch {
            Some(touch) => touch.position,
            None => self.pointer,
        }
    }

    pub fn pointing_down(&self) -> bool {
        self.touch.is_some() || self.buttons.contains(PointerButton::Primary)
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
