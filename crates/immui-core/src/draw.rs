//! Clip stack and draw recording.

use immui_graphics::{Color, Point, Rect};

use crate::command::{Clipping, Command, DrawCallback, Icon};
use crate::context::Context;
use crate::error::{StackKind, UiError};
use crate::id::WidgetId;
use crate::options::WidgetOptions;
use crate::style::ColorRole;

impl Context {
    /// The active clip rectangle.
    pub fn clip_rect(&self) -> Result<Rect, UiError> {
        self.clip_stack.last().copied().ok_or(UiError::EmptyStack {
            stack: StackKind::Clip,
        })
    }

    /// Pushes `rect` intersected with the active clip.
    pub fn push_clip_rect(&mut self, rect: Rect) -> Result<(), UiError> {
        let last = self.clip_rect()?;
        self.clip_stack.push(rect.intersect(last));
        Ok(())
    }

    /// Pushes a clip that ignores the enclosing one. Root containers start
    /// with this so a window declared inside another is not clipped to it.
    pub(crate) fn push_unclipped(&mut self) {
        self.clip_stack.push(Rect::UNCLIPPED);
    }

    pub fn pop_clip_rect(&mut self) -> Result<(), UiError> {
        self.clip_stack.pop().map(|_| ()).ok_or(UiError::EmptyStack {
            stack: StackKind::Clip,
        })
    }

    fn push_command(&mut self, command: Command) -> Result<(), UiError> {
        let root = self.current_root_id()?;
        let container = self.containers.get_mut(root).ok_or(UiError::EmptyStack {
            stack: StackKind::Container,
        })?;
        container.commands.push(command);
        Ok(())
    }

    /// Records `command` for a draw covering `bounds`, bracketed by clip
    /// commands when it is only partly visible.
    fn push_clipped(&mut self, bounds: Rect, command: Command) -> Result<(), UiError> {
        let clip = self.clip_rect()?;
        match Clipping::of(bounds, clip) {
            Clipping::Outside => Ok(()),
            Clipping::Inside => self.push_command(command),
            Clipping::Partial => {
                self.push_command(Command::Clip { rect: clip })?;
                self.push_command(command)?;
                self.push_command(Command::Clip {
                    rect: Rect::UNCLIPPED,
                })
            }
        }
    }

    /// Fills `rect`. The fill is cut to the clip rectangle up front, so it
    /// never needs clip commands.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), UiError> {
        let visible = rect.intersect(self.clip_rect()?);
        if visible.width() > 0 && visible.height() > 0 {
            self.push_command(Command::Rect {
                rect: visible,
                color,
            })?;
        }
        Ok(())
    }

    /// Outlines `rect` with one-unit lines.
    pub fn draw_box(&mut self, rect: Rect, color: Color) -> Result<(), UiError> {
        let Rect { min, max } = rect;
        self.draw_rect(Rect::new(min.x + 1, min.y, max.x - 1, min.y + 1), color)?;
        self.draw_rect(Rect::new(min.x + 1, max.y - 1, max.x - 1, max.y), color)?;
        self.draw_rect(Rect::new(min.x, min.y, min.x + 1, max.y), color)?;
        self.draw_rect(Rect::new(max.x - 1, min.y, max.x, max.y), color)
    }

    pub fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<(), UiError> {
        let bounds = Rect::new(
            position.x,
            position.y,
            position.x + self.text_width(text),
            position.y + self.line_height(),
        );
        self.push_clipped(
            bounds,
            Command::Text {
                text: text.to_owned(),
                position,
                color,
            },
        )
    }

    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) -> Result<(), UiError> {
        self.push_clipped(rect, Command::Icon { icon, rect, color })
    }

    /// Records a client drawing callback covering `rect`.
    pub fn draw_custom(&mut self, rect: Rect, callback: DrawCallback) -> Result<(), UiError> {
        self.push_clipped(rect, Command::Custom { rect, callback })
    }

    /// Fills `rect` in `role` and borders it unless the role is borderless
    /// or the border color is transparent.
    pub fn draw_frame(&mut self, rect: Rect, role: ColorRole) -> Result<(), UiError> {
        self.draw_rect(rect, self.style().color(role))?;
        if role.is_borderless() {
            return Ok(());
        }
        let border = self.style().color(ColorRole::Border);
        if !border.is_transparent() {
            self.draw_box(rect.inset(-1), border)?;
        }
        Ok(())
    }

    /// Draws a widget background in `role`, or its hover/focus variant.
    pub fn draw_widget_frame(
        &mut self,
        id: WidgetId,
        rect: Rect,
        role: ColorRole,
        opt: WidgetOptions,
    ) -> Result<(), UiError> {
        if opt.contains(WidgetOptions::NO_FRAME) {
            return Ok(());
        }
        let role = if !id.is_empty() && self.focus == id {
            role.shifted(2)
        } else if !id.is_empty() && self.hover == id {
            role.shifted(1)
        } else {
            role
        };
        self.draw_frame(rect, role)
    }

    /// Draws `text` vertically centered in `rect`, aligned per `opt`.
    pub fn draw_widget_text(
        &mut self,
        text: &str,
        rect: Rect,
        role: ColorRole,
        opt: WidgetOptions,
    ) -> Result<(), UiError> {
        let width = self.text_width(text);
        let padding = self.style().padding;
        let y = rect.min.y + (rect.height() - self.line_height()) / 2;
        let x = if opt.contains(WidgetOptions::ALIGN_CENTER) {
            rect.min.x + (rect.width() - width) / 2
        } else if opt.contains(WidgetOptions::ALIGN_RIGHT) {
            rect.min.x + rect.width() - width - padding
        } else {
            rect.min.x + padding
        };
        let color = self.style().color(role);
        self.push_clip_rect(rect)?;
        let drawn = self.draw_text(text, Point::new(x, y), color);
        self.pop_clip_rect()?;
        drawn
    }
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
