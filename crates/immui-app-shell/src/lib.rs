//! Application shell: one [`Context`] driving one [`Renderer`].
//!
//! The host calls [`UiShell::update`] once per frame with fresh input and
//! the UI declaration, then [`UiShell::draw`] to replay the recorded
//! commands. Errors are logged; the last one stays available until the
//! next frame.

use std::fmt::Debug;

use immui_core::{Context, InputSource, UiError};
use immui_render_common::{replay, Renderer};

pub struct UiShell<R>
where
    R: Renderer,
{
    ctx: Context,
    renderer: R,
    capturing: bool,
    last_error: Option<UiError>,
}

impl<R> UiShell<R>
where
    R: Renderer,
    R::Error: Debug,
{
    pub fn new(mut ctx: Context, renderer: R) -> Self {
        ctx.set_screen_size(renderer.viewport());
        Self {
            ctx,
            renderer,
            capturing: false,
            last_error: None,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Runs one frame. Returns whether the UI is capturing input, so the
    /// host can skip its own handling of this frame's input.
    pub fn update<F>(&mut self, input: &mut dyn InputSource, f: F) -> bool
    where
        F: FnOnce(&mut Context) -> Result<(), UiError>,
    {
        self.ctx.set_screen_size(self.renderer.viewport());
        match self.ctx.update(input, f) {
            Ok(capturing) => {
                self.capturing = capturing;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("ui frame {} failed: {err}", self.ctx.frame());
                self.capturing = self.ctx.is_capturing_input();
                self.last_error = Some(err);
            }
        }
        self.capturing
    }

    /// Replays the last frame's commands into the renderer.
    pub fn draw(&mut self) -> Result<usize, R::Error> {
        replay(&mut self.renderer, self.ctx.commands()).map_err(|err| {
            log::error!("renderer failed: {err:?}");
            err
        })
    }

    pub fn is_capturing_input(&self) -> bool {
        self.capturing
    }

    /// The error of the last frame, if it failed.
    pub fn last_error(&self) -> Option<&UiError> {
        self.last_error.as_ref()
    }
}
