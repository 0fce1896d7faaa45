//! Widget implementations.

mod button;
mod header;
mod number;
mod slider;
mod text;
mod text_field;

pub use button::{button, button_with, checkbox, checkbox_with};
pub use header::{header, header_with, tree_node, tree_node_with};
pub use slider::{
    number_field, number_field_with, slider, slider_f, slider_f_with, slider_with,
};
pub use text::{label, text, wrap_lines};
pub use text_field::{text_field, text_field_with};
