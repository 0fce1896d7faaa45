//! Leaf widgets for immui.
//!
//! Every widget is a free function over [`Context`] that declares one cell
//! of the current layout. Identity comes from the call site, so a widget
//! declared in a loop needs [`Context::id_scope`] to stay distinct. Each
//! widget has a `*_with` variant taking an explicit [`WidgetId`] and
//! [`WidgetOptions`].

pub mod widgets;

pub use immui_core::{Context, Response, WidgetId, WidgetOptions};
pub use widgets::{
    button, button_with, checkbox, checkbox_with, header, header_with, label, number_field,
    number_field_with, slider, slider_f, slider_f_with, slider_with, text, text_field,
    text_field_with, tree_node, tree_node_with,
};

pub mod prelude {
    pub use crate::widgets::*;
    pub use immui_core::prelude::*;
}
