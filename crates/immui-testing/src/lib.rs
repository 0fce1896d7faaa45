//! Testing utilities and harness for immui.

pub mod testing;

pub use testing::*;

pub use immui_render_common::{RecordingRenderer, RenderOp};

pub mod prelude {
    pub use crate::testing::*;
    pub use immui_render_common::{RecordingRenderer, RenderOp};
}
