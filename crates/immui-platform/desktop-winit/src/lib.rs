//! Accumulates winit window events into per-frame [`InputSnapshot`]s.
//!
//! Feed every [`WindowEvent`] to [`DesktopWinitPlatform::handle_event`]
//! and hand the platform to the context as its [`InputSource`]. Positions
//! are converted from physical pixels to logical UI units.

use immui_core::InputSource;
use immui_foundation::{InputSnapshot, Key, PointerButton, Touch, WheelDelta};
use immui_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{
    ElementState, MouseButton, MouseScrollDelta, TouchPhase, VirtualKeyCode, WindowEvent,
};

/// Logical pixels of trackpad scrolling that count as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 20.0;

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    state: InputSnapshot,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            state: InputSnapshot::new(),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point::new(
            (position.x / self.scale_factor) as i32,
            (position.y / self.scale_factor) as i32,
        )
    }

    /// Folds `event` into the pending snapshot. Returns whether the event
    /// was one the UI consumes.
    pub fn handle_event(&mut self, event: &WindowEvent<'_>) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*button, *state),
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(*delta),
            WindowEvent::KeyboardInput { input, .. } => match input.virtual_keycode {
                Some(code) => self.keyboard_input(code, input.state),
                None => return false,
            },
            WindowEvent::ReceivedCharacter(c) => self.received_character(*c),
            WindowEvent::Touch(touch) => self.touch(touch.id, touch.phase, touch.location),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("scale factor changed to {scale_factor}");
                self.set_scale_factor(*scale_factor);
            }
            _ => return false,
        }
        true
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.state.pointer = self.pointer_position(position);
    }

    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Other(_) => return,
        };
        match state {
            ElementState::Pressed => self.state.buttons.insert(button),
            ElementState::Released => self.state.buttons.remove(button),
        }
    }

    pub fn mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let (x, y) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(pixels) => {
                let notch = PIXELS_PER_NOTCH * self.scale_factor;
                ((pixels.x / notch) as f32, (pixels.y / notch) as f32)
            }
        };
        let wheel = self.state.wheel;
        self.state.wheel = WheelDelta::new(wheel.x + x, wheel.y + y);
    }

    pub fn keyboard_input(&mut self, code: VirtualKeyCode, state: ElementState) {
        let Some(key) = map_key(code) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                self.state.keys_down.insert(key);
                self.state.keys_pressed.insert(key);
            }
            ElementState::Released => self.state.keys_down.remove(key),
        }
    }

    pub fn received_character(&mut self, c: char) {
        if !c.is_control() {
            self.state.text.push(c);
        }
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, location: PhysicalPosition<f64>) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.state.touch = Some(Touch {
                    id,
                    position: self.pointer_position(location),
                });
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.state.touch.map_or(false, |touch| touch.id == id) {
                    self.state.touch = None;
                }
            }
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl InputSource for DesktopWinitPlatform {
    /// Returns the accumulated state and starts a new frame: wheel, typed
    /// text and key presses are cleared, held state is kept.
    fn poll(&mut self) -> InputSnapshot {
        let snapshot = self.state.clone();
        self.state.wheel = WheelDelta::ZERO;
        self.state.text.clear();
        self.state.keys_pressed = Default::default();
        snapshot
    }
}

fn map_key(code: VirtualKeyCode) -> Option<Key> {
    let key = match code {
        VirtualKeyCode::LShift | VirtualKeyCode::RShift => Key::Shift,
        VirtualKeyCode::LControl | VirtualKeyCode::RControl => Key::Control,
        VirtualKeyCode::LAlt | VirtualKeyCode::RAlt => Key::Alt,
        VirtualKeyCode::Back => Key::Backspace,
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Key::Enter,
        VirtualKeyCode::Tab => Key::Tab,
        VirtualKeyCode::Escape => Key::Escape,
        VirtualKeyCode::Delete => Key::Delete,
        VirtualKeyCode::Left => Key::Left,
        VirtualKeyCode::Right => Key::Right,
        VirtualKeyCode::Home => Key::Home,
        VirtualKeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
