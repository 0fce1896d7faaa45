use std::collections::VecDeque;

use immui_core::{
    Command, Context, InputSnapshot, InputSource, Key, Point, PointerButton, Rect, TextMetrics,
    UiError, WheelDelta,
};
use immui_render_common::{replay, RecordingRenderer};

/// Installs an `env_logger` for tests. Safe to call from every test;
/// later calls are ignored. Filter with `RUST_LOG` as usual.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Monospace metrics: every character has the same advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub line_height: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 10,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.char_width
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Input that replays queued snapshots, then repeats the last one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queued: VecDeque<InputSnapshot>,
    current: InputSnapshot,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: InputSnapshot) -> &mut Self {
        self.queued.push_back(snapshot);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.queued.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        if let Some(next) = self.queued.pop_front() {
            self.current = next;
        }
        self.current.clone()
    }
}

/// A context plus the input state of a simulated user, driven one frame
/// at a time.
///
/// Pointer helpers change the held state and run no frame; pass the
/// declaration to [`TestHarness::frame`] afterwards. Per-frame inputs
/// (wheel, typed text, key presses) are cleared after each frame.
pub struct TestHarness {
    ctx: Context,
    input: InputSnapshot,
    renderer: RecordingRenderer,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_context(Context::new(FixedMetrics::default()))
    }

    pub fn with_context(ctx: Context) -> Self {
        Self {
            ctx,
            input: InputSnapshot::new(),
            renderer: RecordingRenderer::default(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.input.pointer = Point::new(x, y);
        self
    }

    pub fn press(&mut self) -> &mut Self {
        self.input.buttons.insert(PointerButton::Primary);
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.input.buttons.remove(PointerButton::Primary);
        self
    }

    pub fn hold_key(&mut self, key: Key) -> &mut Self {
        self.input.keys_down.insert(key);
        self
    }

    pub fn release_key(&mut self, key: Key) -> &mut Self {
        self.input.keys_down.remove(key);
        self
    }

    /// Presses `key` for the next frame only.
    pub fn tap_key(&mut self, key: Key) -> &mut Self {
        self.input.keys_pressed.insert(key);
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.input.text.push_str(text);
        self
    }

    pub fn scroll(&mut self, x: f32, y: f32) -> &mut Self {
        self.input.wheel = WheelDelta::new(x, y);
        self
    }

    /// Runs one frame declaring `f`.
    pub fn frame(&mut self, f: impl FnOnce(&mut Context)) -> Result<bool, UiError> {
        self.try_frame(|ctx| {
            f(ctx);
            Ok(())
        })
    }

    pub fn try_frame(
        &mut self,
        f: impl FnOnce(&mut Context) -> Result<(), UiError>,
    ) -> Result<bool, UiError> {
        let mut input = self.input.clone();
        let result = self.ctx.update(&mut input, f);
        self.input.wheel = WheelDelta::ZERO;
        self.input.text.clear();
        self.input.keys_pressed = Default::default();
        result
    }

    /// Moves to `(x, y)` and clicks there, running the three frames a
    /// click needs: hover, press, release. Each frame declares `f`.
    pub fn click(
        &mut self,
        x: i32,
        y: i32,
        mut f: impl FnMut(&mut Context),
    ) -> Result<(), UiError> {
        self.move_to(x, y).frame(&mut f)?;
        self.press().frame(&mut f)?;
        self.release().frame(&mut f)?;
        Ok(())
    }

    /// Commands of the last frame, back to front.
    pub fn commands(&self) -> Vec<Command> {
        self.ctx.commands().cloned().collect()
    }

    /// Replays the last frame into the harness renderer.
    pub fn render(&mut self) -> &RecordingRenderer {
        self.renderer.take_operations();
        match replay(&mut self.renderer, self.ctx.commands()) {
            Ok(_) => {}
            Err(never) => match never {},
        }
        &self.renderer
    }

    /// Whether any recorded text run equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.ctx
            .commands()
            .any(|command| matches!(command, Command::Text { text: t, .. } if t == text))
    }

    /// Bounds of the root container `title`, if it exists.
    pub fn window_bounds(&self, title: &str) -> Option<Rect> {
        self.ctx
            .container(Context::window_id(title))
            .map(|container| container.layout().bounds)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
