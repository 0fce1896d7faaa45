//! The generic widget primitive and the editing state widgets share.

use immui_graphics::{Point, Rect};

use crate::context::Context;
use crate::error::UiError;
use crate::id::WidgetId;
use crate::options::WidgetOptions;

impl Context {
    /// Declares one widget in the next layout cell.
    ///
    /// `handle` runs after hover and focus are reconciled and receives the
    /// cell plus whether the widget just lost focus; `draw` then records
    /// its appearance. Both see the context in the state the widget left it.
    pub fn widget<R>(
        &mut self,
        id: WidgetId,
        opt: WidgetOptions,
        handle: impl FnOnce(&mut Context, Rect, bool) -> Result<R, UiError>,
        draw: impl FnOnce(&mut Context, Rect) -> Result<(), UiError>,
    ) -> Result<R, UiError> {
        let bounds = self.next_rect()?;
        let was_focused = self.reconcile(id, bounds, opt)?;
        let result = handle(self, bounds, was_focused)?;
        draw(self, bounds)?;
        self.last_id = id;
        Ok(result)
    }

    /// Runs one frame of text editing for the focused widget `id`,
    /// mirroring the collaborator's text into `buf`. Returns whether the
    /// collaborator consumed the frame's input.
    pub fn edit_text(
        &mut self,
        id: WidgetId,
        buf: &mut String,
        caret: Point,
    ) -> Result<bool, UiError> {
        self.live_text_fields.insert(id);
        let field = self.text_input.field(id);
        field.focus();
        let handled = field.handle_input(&self.input, caret)?;
        if buf.as_str() != field.text() {
            buf.clear();
            buf.push_str(field.text());
        }
        Ok(handled)
    }

    /// Pushes `text` into the collaborator's field for `id` when they
    /// differ, with the caret at the end.
    pub fn sync_text(&mut self, id: WidgetId, text: &str) {
        self.live_text_fields.insert(id);
        let field = self.text_input.field(id);
        if field.text() != text {
            field.set_text_and_selection(text, text.len(), text.len());
        }
    }

    /// Replaces the text of the field bound to `id`, caret at the start.
    pub fn set_text_field_value(&mut self, id: WidgetId, text: &str) {
        self.text_input.field(id).set_text_and_selection(text, 0, 0);
    }

    /// Switches `id` into numeric text entry, starting from `text`.
    pub fn begin_number_edit(&mut self, id: WidgetId, text: String) {
        self.number_edit = Some((id, text));
    }

    pub fn is_number_editing(&self, id: WidgetId) -> bool {
        matches!(&self.number_edit, Some((editing, _)) if *editing == id)
    }

    /// Removes the numeric edit buffer of `id`, if `id` is being edited.
    /// Put it back with [`Context::begin_number_edit`] to keep editing.
    pub fn take_number_edit(&mut self, id: WidgetId) -> Option<String> {
        if !self.is_number_editing(id) {
            return None;
        }
        self.number_edit.take().map(|(_, text)| text)
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
