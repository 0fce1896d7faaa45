//! Abstract draw commands recorded during a frame.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use immui_graphics::{Color, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Check,
    Collapsed,
    Expanded,
}

/// Client drawing hook replayed by the renderer.
///
/// The renderer passes its own drawing surface as `&mut dyn Any`; the
/// callback downcasts it to whatever type it expects.
#[derive(Clone)]
pub struct DrawCallback(Rc<dyn Fn(&mut dyn Any)>);

impl DrawCallback {
    pub fn new(f: impl Fn(&mut dyn Any) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, surface: &mut dyn Any) {
        (self.0)(surface)
    }
}

impl fmt::Debug for DrawCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DrawCallback(..)")
    }
}

impl PartialEq for DrawCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Sets the renderer's clip rectangle for the commands that follow.
    Clip { rect: Rect },
    Rect { rect: Rect, color: Color },
    Text {
        text: String,
        position: Point,
        color: Color,
    },
    Icon { icon: Icon, rect: Rect, color: Color },
    Custom { rect: Rect, callback: DrawCallback },
}

impl Command {
    pub fn clip_rect(&self) -> Option<Rect> {
        match self {
            Command::Clip { rect } => Some(*rect),
            _ => None,
        }
    }
}

/// How a draw relates to the active clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Clipping {
    Inside,
    Partial,
    Outside,
}

impl Clipping {
    pub(crate) fn of(bounds: Rect, clip: Rect) -> Clipping {
        if !bounds.overlaps(clip) {
            Clipping::Outside
        } else if bounds.is_inside(clip) {
            Clipping::Inside
        } else {
            Clipping::Partial
        }
    }
}
