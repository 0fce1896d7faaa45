//! Common rendering contracts shared between renderer backends.
//!
//! The engine never rasterizes. Each frame it hands its recorded
//! [`Command`]s, back to front, to a [`Renderer`] through [`replay`].

mod recording;

use immui_core::{Command, DrawCallback, Icon};
use immui_graphics::{Color, Point, Rect, Size};

pub use recording::{RecordingRenderer, RenderOp};

/// Abstraction implemented by concrete renderer backends.
pub trait Renderer {
    type Error;

    /// Size of the drawing surface in UI units.
    fn viewport(&self) -> Size;

    /// Restricts the following draws to `rect`. [`Rect::UNCLIPPED`] lifts
    /// the restriction.
    fn set_clip(&mut self, rect: Rect) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, position: Point, color: Color) -> Result<(), Self::Error>;

    fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) -> Result<(), Self::Error>;

    /// Runs a client drawing callback over `rect`.
    fn draw_custom(&mut self, rect: Rect, callback: &DrawCallback) -> Result<(), Self::Error>;
}

/// Replays `commands` in order, stopping at the first renderer error.
/// Returns the number of commands replayed.
pub fn replay<'a, R>(
    renderer: &mut R,
    commands: impl IntoIterator<Item = &'a Command>,
) -> Result<usize, R::Error>
where
    R: Renderer + ?Sized,
{
    let mut count = 0;
    for command in commands {
        match command {
            Command::Clip { rect } => renderer.set_clip(*rect)?,
            Command::Rect { rect, color } => renderer.fill_rect(*rect, *color)?,
            Command::Text {
                text,
                position,
                color,
            } => renderer.draw_text(text, *position, *color)?,
            Command::Icon { icon, rect, color } => renderer.draw_icon(*icon, *rect, *color)?,
            Command::Custom { rect, callback } => renderer.draw_custom(*rect, callback)?,
        }
        count += 1;
    }
    log::trace!("replayed {count} draw commands");
    Ok(count)
}

#[cfg(test)]
#[path = "tests/replay_tests.rs"]
mod tests;
