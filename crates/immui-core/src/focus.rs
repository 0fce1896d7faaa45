//! Hover and focus arbitration.

use immui_graphics::Rect;

use crate::context::Context;
use crate::error::UiError;
use crate::id::WidgetId;
use crate::options::WidgetOptions;

impl Context {
    /// Whether the container chain up to the nearest root reaches the
    /// current hover root.
    pub(crate) fn in_hover_root(&self) -> bool {
        let Some(hover_root) = self.hover_root else {
            return false;
        };
        for id in self.container_stack.iter().rev() {
            if *id == hover_root {
                return true;
            }
            if self.containers.get(*id).map_or(true, |c| c.is_root()) {
                break;
            }
        }
        false
    }

    /// Whether the pointer is over `bounds`, inside the active clip, and
    /// in the hover root.
    pub fn pointer_over(&self, bounds: Rect) -> Result<bool, UiError> {
        let position = self.pointing.position();
        Ok(bounds.contains(position)
            && self.clip_rect()?.contains(position)
            && self.in_hover_root())
    }

    /// Updates hover and focus for the widget `id` occupying `bounds`.
    ///
    /// Returns true when the widget lost focus during this call, either to
    /// a press elsewhere or to a release without `HOLD_FOCUS`.
    pub fn reconcile(
        &mut self,
        id: WidgetId,
        bounds: Rect,
        opt: WidgetOptions,
    ) -> Result<bool, UiError> {
        if id.is_empty() {
            return Ok(false);
        }
        let over = self.pointer_over(bounds)?;

        if self.focus == id {
            self.keep_focus = true;
        }
        if opt.contains(WidgetOptions::NO_INTERACT) {
            return Ok(false);
        }
        if over && !self.pointing.pressed() {
            self.hover = id;
        }

        let mut was_focused = false;
        if self.focus == id {
            if self.pointing.just_pressed() && !over {
                self.set_focus(WidgetId::EMPTY);
                was_focused = true;
            }
            if !self.pointing.pressed() && !opt.contains(WidgetOptions::HOLD_FOCUS) {
                self.set_focus(WidgetId::EMPTY);
                was_focused = true;
            }
        }

        if self.hover == id {
            if self.pointing.just_pressed() {
                self.set_focus(id);
            } else if !over {
                self.hover = WidgetId::EMPTY;
            }
        }

        Ok(was_focused)
    }
}

#[cfg(test)]
#[path = "tests/focus_tests.rs"]
mod tests;
