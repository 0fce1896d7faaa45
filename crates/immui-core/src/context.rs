//! The frame-lifecycle state machine.

use immui_foundation::{InputSnapshot, Pointing};
use immui_graphics::{Point, Rect, Size};
use immui_layout::FlowLayout;

use crate::collections::WidgetSet;
use crate::command::Command;
use crate::container::{Container, ContainerRegistry};
use crate::error::{StackKind, UiError};
use crate::id::{IdSource, IdStack, WidgetId};
use crate::platform::{InputSource, PlainTextInput, TextInput, TextMetrics};
use crate::style::Style;

/// Immediate-mode UI state carried from one frame to the next.
///
/// Each frame runs [`Context::begin`], the client's declarations, then
/// [`Context::end`]; [`Context::update`] does all three. Between frames the
/// recorded draw commands are available from [`Context::commands`].
///
/// A context is single-threaded: it owns non-`Send` collaborators and must
/// stay on the thread that drives it.
pub struct Context {
    style: Style,
    metrics: Box<dyn TextMetrics>,
    pub(crate) text_input: Box<dyn TextInput>,
    pub(crate) input: InputSnapshot,
    pub(crate) pointing: Pointing,
    screen_size: Option<Size>,

    pub(crate) hover: WidgetId,
    pub(crate) focus: WidgetId,
    pub(crate) last_id: WidgetId,
    pub(crate) keep_focus: bool,
    pub(crate) hover_root: Option<WidgetId>,
    pub(crate) next_hover_root: Option<WidgetId>,
    pub(crate) scroll_target: Option<WidgetId>,
    pub(crate) number_edit: Option<(WidgetId, String)>,

    pub(crate) ids: IdStack,
    pub(crate) containers: ContainerRegistry,
    pub(crate) container_stack: Vec<WidgetId>,
    pub(crate) clip_stack: Vec<Rect>,
    pub(crate) layout_stack: Vec<FlowLayout>,
    pub(crate) live_text_fields: WidgetSet,

    error: Option<UiError>,
    frame: u64,
}

impl Context {
    pub fn new(metrics: impl TextMetrics + 'static) -> Self {
        Self {
            style: Style::default(),
            metrics: Box::new(metrics),
            text_input: Box::new(PlainTextInput::new()),
            input: InputSnapshot::default(),
            pointing: Pointing::new(),
            screen_size: None,
            hover: WidgetId::EMPTY,
            focus: WidgetId::EMPTY,
            last_id: WidgetId::EMPTY,
            keep_focus: false,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            number_edit: None,
            ids: IdStack::default(),
            containers: ContainerRegistry::new(),
            container_stack: Vec::new(),
            clip_stack: Vec::new(),
            layout_stack: Vec::new(),
            live_text_fields: WidgetSet::default(),
            error: None,
            frame: 0,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_text_input(mut self, text_input: impl TextInput + 'static) -> Self {
        self.text_input = Box::new(text_input);
        self
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Screen size used to keep dragged and resized windows on screen.
    pub fn set_screen_size(&mut self, size: Size) {
        self.screen_size = Some(size);
    }

    pub fn screen_size(&self) -> Option<Size> {
        self.screen_size
    }

    pub fn text_width(&self, text: &str) -> i32 {
        self.metrics.text_width(text)
    }

    pub fn line_height(&self) -> i32 {
        self.metrics.line_height()
    }

    /// Input snapshot polled at the start of the current frame.
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn pointing(&self) -> &Pointing {
        &self.pointing
    }

    pub fn hover(&self) -> WidgetId {
        self.hover
    }

    pub fn focus(&self) -> WidgetId {
        self.focus
    }

    /// Focuses `id` and keeps it focused through the end of this frame.
    pub fn set_focus(&mut self, id: WidgetId) {
        self.focus = id;
        self.keep_focus = true;
    }

    /// Identifier of the most recent widget declared with [`Context::widget`].
    pub fn last_id(&self) -> WidgetId {
        self.last_id
    }

    pub fn hover_root(&self) -> Option<WidgetId> {
        self.hover_root
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    pub fn container(&self, id: WidgetId) -> Option<&Container> {
        self.containers.get(id)
    }

    /// Starts a frame: polls input, clears last frame's commands and
    /// force-resets every stack and the latched error.
    pub fn begin(&mut self, input: &mut dyn InputSource) {
        self.input = input.poll();
        self.pointing.update(&self.input);

        self.containers.clear_commands();
        self.ids.clear();
        self.container_stack.clear();
        self.clip_stack.clear();
        self.layout_stack.clear();
        self.live_text_fields.clear();
        self.error = None;

        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.last_id = WidgetId::EMPTY;
    }

    /// Finishes a frame and returns the error latched during it, if any.
    pub fn end(&mut self) -> Result<(), UiError> {
        if self.error.is_none() {
            if let Some(err) = self.check_stacks() {
                log::warn!("unbalanced frame: {err}");
                self.error = Some(err);
            }
        }
        let failed = self.error.is_some();

        if !failed {
            self.apply_wheel();
        }

        if !self.keep_focus {
            self.focus = WidgetId::EMPTY;
        }
        self.keep_focus = false;

        if self.pointing.just_pressed() {
            if let Some(root) = self.next_hover_root {
                if !self.containers.is_topmost(root) {
                    self.containers.bring_to_front(root);
                }
            }
        }

        // An aborted declaration did not re-touch every surviving container.
        if failed {
            self.containers.clear_used();
        } else {
            self.containers.evict_unused();
            let live = &self.live_text_fields;
            self.text_input.retain(&|id| live.contains(&id));
        }
        self.containers.sort_roots();
        self.frame += 1;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Runs one frame around `f`. Returns whether the UI is capturing input.
    pub fn update<F>(&mut self, input: &mut dyn InputSource, f: F) -> Result<bool, UiError>
    where
        F: FnOnce(&mut Context) -> Result<(), UiError>,
    {
        self.begin(input);
        if let Err(err) = f(self) {
            self.latch(err);
        }
        self.end()?;
        Ok(self.is_capturing_input())
    }

    /// Draw commands of the last frame, back to front.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.containers.commands()
    }

    /// True while a widget holds focus or the pointer is over an open window.
    pub fn is_capturing_input(&self) -> bool {
        if !self.focus.is_empty() {
            return true;
        }
        let position = self.pointing.position();
        self.containers
            .roots()
            .any(|container| container.open && container.layout.bounds.contains(position))
    }

    /// Records `err` unless an earlier error of this frame is already latched.
    pub fn latch(&mut self, err: UiError) {
        if self.error.is_none() {
            log::debug!("frame {} latched error: {err}", self.frame);
            self.error = Some(err);
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Runs `f` unless an error is latched, latching whatever it returns.
    /// Yields `R::default()` when skipped or failed.
    pub fn wrap_error<R: Default>(
        &mut self,
        f: impl FnOnce(&mut Context) -> Result<R, UiError>,
    ) -> R {
        if self.error.is_some() {
            return R::default();
        }
        match f(self) {
            Ok(value) => value,
            Err(err) => {
                self.latch(err);
                R::default()
            }
        }
    }

    /// Identifier of `leaf` under the current scope.
    pub fn id_for<'a>(&self, leaf: impl Into<IdSource<'a>>) -> WidgetId {
        self.ids.id_for(leaf)
    }

    /// Identifier of the calling location under the current scope.
    #[track_caller]
    pub fn caller_id(&self) -> WidgetId {
        self.ids.id_for(IdSource::caller())
    }

    pub fn push_id_scope<'a>(&mut self, token: impl Into<IdSource<'a>>) -> WidgetId {
        self.ids.push(token)
    }

    pub fn pop_id_scope(&mut self) -> Result<(), UiError> {
        self.ids.pop().map(|_| ())
    }

    /// Runs `f` in a scope keyed by the call site and `key`, so the same
    /// declarations can repeat, e.g. once per loop iteration.
    #[track_caller]
    pub fn id_scope<'a, R>(
        &mut self,
        key: impl Into<IdSource<'a>>,
        f: impl FnOnce(&mut Context) -> R,
    ) -> R {
        self.ids.push(IdSource::caller());
        self.ids.push(key);
        let result = f(self);
        for _ in 0..2 {
            if let Err(err) = self.ids.pop() {
                self.latch(err);
            }
        }
        result
    }

    pub(crate) fn current_container_id(&self) -> Result<WidgetId, UiError> {
        self.container_stack
            .last()
            .copied()
            .ok_or(UiError::EmptyStack {
                stack: StackKind::Container,
            })
    }

    pub(crate) fn current_container_mut(&mut self) -> Result<&mut Container, UiError> {
        let id = self.current_container_id()?;
        self.containers.get_mut(id).ok_or(UiError::EmptyStack {
            stack: StackKind::Container,
        })
    }

    pub fn current_container(&self) -> Result<&Container, UiError> {
        let id = self.current_container_id()?;
        self.containers.get(id).ok_or(UiError::EmptyStack {
            stack: StackKind::Container,
        })
    }

    /// Nearest root container on the container stack; commands land there.
    pub(crate) fn current_root_id(&self) -> Result<WidgetId, UiError> {
        self.container_stack
            .iter()
            .rev()
            .copied()
            .find(|id| self.containers.get(*id).map_or(false, Container::is_root))
            .ok_or(UiError::EmptyStack {
                stack: StackKind::Container,
            })
    }

    /// Whether `id` is in the current container's toggle set.
    pub fn is_toggled(&self, id: WidgetId) -> Result<bool, UiError> {
        Ok(self.current_container()?.is_toggled(id))
    }

    pub fn toggle(&mut self, id: WidgetId) -> Result<(), UiError> {
        self.current_container_mut()?.toggle(id);
        Ok(())
    }

    /// Scroll offset of the current container, applied from the next frame.
    pub fn set_scroll(&mut self, offset: Point) {
        self.wrap_error(|ctx| {
            ctx.current_container_mut()?.layout.scroll_offset = offset;
            Ok(())
        })
    }

    fn check_stacks(&self) -> Option<UiError> {
        let depths = [
            (StackKind::Id, self.ids.len()),
            (StackKind::Container, self.container_stack.len()),
            (StackKind::Clip, self.clip_stack.len()),
            (StackKind::Layout, self.layout_stack.len()),
        ];
        depths
            .into_iter()
            .find(|(_, depth)| *depth > 0)
            .map(|(stack, depth)| UiError::StackImbalance { stack, depth })
    }

    fn apply_wheel(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let wheel = self.input.wheel;
        if wheel.is_zero() {
            return;
        }
        let speed = self.style.scroll_speed;
        if let Some(container) = self.containers.get_mut(target) {
            container.layout.scroll_offset.x += (wheel.x * -speed) as i32;
            container.layout.scroll_offset.y += (wheel.y * -speed) as i32;
        }
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
