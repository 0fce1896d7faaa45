//! Core of the immui immediate-mode UI engine.
//!
//! Client code redeclares its whole interface every frame. The [`Context`]
//! turns that flat sequence of calls into stable widget identity, keeps
//! retained container state (bounds, scroll, z-order) across frames,
//! arbitrates hover and focus, and records draw commands per root
//! container for back-to-front replay.

pub mod collections;
pub mod hash;
pub mod platform;

mod command;
mod container;
mod context;
mod draw;
mod error;
mod focus;
mod id;
mod layout;
mod options;
mod style;
mod widget;
mod window;

pub use command::{Command, DrawCallback, Icon};
pub use container::{Container, ContainerLayout, ContainerRegistry};
pub use context::Context;
pub use error::{StackKind, TextInputError, UiError};
pub use id::{location_key, IdSource, WidgetId};
pub use options::{Response, WidgetOptions};
pub use platform::{
    InputSource, PlainTextField, PlainTextInput, TextField, TextInput, TextMetrics,
};
pub use style::{ColorRole, Style};

pub use immui_foundation::{InputSnapshot, Key, PointerButton, Pointing, Touch, WheelDelta};
pub use immui_graphics::{Color, Point, Rect, Size};
pub use immui_layout::FlowLayout;

pub mod prelude {
    pub use crate::{
        Color, ColorRole, Context, ContainerLayout, InputSnapshot, InputSource, Point, Rect,
        Response, Size, Style, UiError, WidgetId, WidgetOptions,
    };
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::platform::TextMetrics;

    /// Every character is 8 units wide; lines are 10 units tall.
    pub(crate) struct MonoMetrics;

    impl TextMetrics for MonoMetrics {
        fn text_width(&self, text: &str) -> i32 {
            text.chars().count() as i32 * 8
        }

        fn line_height(&self) -> i32 {
            10
        }
    }
}
