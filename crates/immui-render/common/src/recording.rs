use std::convert::Infallible;

use immui_core::{DrawCallback, Icon};
use immui_graphics::{Color, Point, Rect, Size};

use crate::Renderer;

/// An operation received by a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Clip(Rect),
    Fill { rect: Rect, color: Color },
    Text {
        text: String,
        position: Point,
        color: Color,
    },
    Icon { icon: Icon, rect: Rect, color: Color },
    Custom { rect: Rect },
}

/// A renderer that only records what it is asked to draw.
///
/// Custom callbacks are invoked with the renderer's op list
/// (`Vec<RenderOp>`) as their surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingRenderer {
    viewport: Size,
    clip: Rect,
    operations: Vec<RenderOp>,
}

impl RecordingRenderer {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            clip: Rect::UNCLIPPED,
            operations: Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Recorded operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Takes the recorded operations, leaving the renderer empty.
    pub fn take_operations(&mut self) -> Vec<RenderOp> {
        self.clip = Rect::UNCLIPPED;
        std::mem::take(&mut self.operations)
    }

    /// The clip rectangle in effect after the last operation.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Recorded text runs in submission order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(Size::new(800, 600))
    }
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn set_clip(&mut self, rect: Rect) -> Result<(), Self::Error> {
        self.clip = rect;
        self.operations.push(RenderOp::Clip(rect));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
        self.operations.push(RenderOp::Fill { rect, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<(), Self::Error> {
        self.operations.push(RenderOp::Text {
            text: text.to_owned(),
            position,
            color,
        });
        Ok(())
    }

    fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) -> Result<(), Self::Error> {
        self.operations.push(RenderOp::Icon { icon, rect, color });
        Ok(())
    }

    fn draw_custom(&mut self, rect: Rect, callback: &DrawCallback) -> Result<(), Self::Error> {
        self.operations.push(RenderOp::Custom { rect });
        callback.call(&mut self.operations);
        Ok(())
    }
}
