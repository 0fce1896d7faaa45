//! Collaborator traits the engine delegates to the host.
//!
//! Rasterization, font metrics, raw input polling and text editing all live
//! outside the engine. These traits are the boundary; none of them needs to
//! be thread-safe because a context never leaves the thread that drives it.

use immui_foundation::InputSnapshot;
use immui_graphics::Point;

use crate::collections::WidgetMap;
use crate::error::TextInputError;
use crate::id::WidgetId;

/// Produces the input state for a frame. Polled once per frame.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

impl InputSource for InputSnapshot {
    fn poll(&mut self) -> InputSnapshot {
        self.clone()
    }
}

/// Measures text for layout and alignment.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> i32;
    fn line_height(&self) -> i32;
}

/// One editable text field owned by the text-input collaborator.
pub trait TextField {
    fn focus(&mut self);
    fn text(&self) -> &str;
    /// Replaces the text and selection; `start`/`end` are byte offsets.
    fn set_text_and_selection(&mut self, text: &str, start: usize, end: usize);
    /// Runs one frame of editing. Returns whether the field consumed the
    /// frame's input; unconsumed Backspace and Enter fall back to the widget.
    fn handle_input(&mut self, input: &InputSnapshot, caret: Point) -> Result<bool, TextInputError>;
}

/// Hands out the text field bound to a widget.
pub trait TextInput {
    fn field(&mut self, id: WidgetId) -> &mut dyn TextField;

    /// Drops fields whose widget was not declared this frame.
    fn retain(&mut self, _live: &dyn Fn(WidgetId) -> bool) {}
}

/// Text field that appends typed characters and leaves every key to the widget.
#[derive(Clone, Debug, Default)]
pub struct PlainTextField {
    text: String,
    selection: (usize, usize),
    focused: bool,
}

impl PlainTextField {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn selection(&self) -> (usize, usize) {
        self.selection
    }
}

impl TextField for PlainTextField {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text_and_selection(&mut self, text: &str, start: usize, end: usize) {
        self.text.clear();
        self.text.push_str(text);
        self.selection = (char_boundary(text, start), char_boundary(text, end));
    }

    fn handle_input(
        &mut self,
        input: &InputSnapshot,
        _caret: Point,
    ) -> Result<bool, TextInputError> {
        let (start, end) = self.selection;
        if start > end || end > self.text.len() {
            return Err(TextInputError::InvalidSelection {
                start,
                end,
                len: self.text.len(),
            });
        }
        if input.text.is_empty() {
            return Ok(false);
        }
        let typed: String = input.text.chars().filter(|c| !c.is_control()).collect();
        if typed.is_empty() {
            return Ok(false);
        }
        self.text.replace_range(start..end, &typed);
        let caret = start + typed.len();
        self.selection = (caret, caret);
        Ok(true)
    }
}

fn char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Default text-input collaborator backed by [`PlainTextField`]s.
#[derive(Debug, Default)]
pub struct PlainTextInput {
    fields: WidgetMap<PlainTextField>,
}

impl PlainTextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TextInput for PlainTextInput {
    fn field(&mut self, id: WidgetId) -> &mut dyn TextField {
        self.fields.entry(id).or_default()
    }

    fn retain(&mut self, live: &dyn Fn(WidgetId) -> bool) {
        self.fields.retain(|id, _| live(*id));
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
