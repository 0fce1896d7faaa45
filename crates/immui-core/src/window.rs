//! Containers: windows, popups, panels and their scrollbars.

use immui_graphics::{Point, Rect, Size};

use crate::command::Icon;
use crate::container::ContainerLayout;
use crate::context::Context;
use crate::error::{StackKind, UiError};
use crate::id::WidgetId;
use crate::options::WidgetOptions;
use crate::style::ColorRole;

const MIN_WINDOW_WIDTH: i32 = 96;
const MIN_WINDOW_HEIGHT: i32 = 64;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScrollAxis {
    Vertical,
    Horizontal,
}

impl Context {
    /// Identifier of the window titled `title`. Window identity ignores the
    /// scope stack.
    pub fn window_id(title: &str) -> WidgetId {
        WidgetId::global(title)
    }

    /// Declares a window and runs `f` for its body when it is open and
    /// expanded. `rect` is only used the first time the window appears.
    pub fn window(
        &mut self,
        title: &str,
        rect: Rect,
        f: impl FnOnce(&mut Context, ContainerLayout),
    ) {
        self.window_with_options(title, rect, WidgetOptions::NONE, f)
    }

    pub fn window_with_options(
        &mut self,
        title: &str,
        rect: Rect,
        opt: WidgetOptions,
        f: impl FnOnce(&mut Context, ContainerLayout),
    ) {
        if self.has_error() {
            return;
        }
        match self.begin_window(title, rect, opt) {
            Ok(Some(layout)) => {
                f(self, layout);
                if let Err(err) = self.end_window() {
                    self.latch(err);
                }
            }
            Ok(None) => {}
            Err(err) => self.latch(err),
        }
    }

    /// Opens a window body. On `Ok(Some(_))` the caller must declare the
    /// body and then call [`Context::end_window`]; on `Ok(None)` the window
    /// is closed or collapsed and nothing is left pushed.
    pub fn begin_window(
        &mut self,
        title: &str,
        rect: Rect,
        opt: WidgetOptions,
    ) -> Result<Option<ContainerLayout>, UiError> {
        let id = Context::window_id(title);
        let create = !opt.contains(WidgetOptions::CLOSED);
        let Some(container) = self.containers.get_or_create(id, create) else {
            return Ok(None);
        };
        if !container.open {
            return Ok(None);
        }
        container.parent = None;
        if container.layout.bounds.width() == 0 {
            container.layout.bounds = rect;
        }
        let bounds = container.layout.bounds;
        let collapsed = container.collapsed;
        let z_index = container.z_index;

        self.ids.push_id(id);
        self.container_stack.push(id);

        let position = self.pointing.position();
        let above_candidate = match self.next_hover_root {
            Some(candidate) => self
                .containers
                .z_index(candidate)
                .map_or(true, |z| z_index > z),
            None => true,
        };
        if bounds.contains(position) && above_candidate {
            self.next_hover_root = Some(id);
        }

        self.push_unclipped();

        if !opt.contains(WidgetOptions::NO_FRAME) && !collapsed {
            self.draw_frame(bounds, ColorRole::WindowBg)?;
        }

        let mut body = bounds;
        if !opt.contains(WidgetOptions::NO_TITLE) {
            let title_bar = Rect::new(
                bounds.min.x,
                bounds.min.y,
                bounds.max.x,
                bounds.min.y + self.style().title_height,
            );
            self.title_bar(id, title, title_bar, opt)?;
            body.min.y += title_bar.height();
        }

        if collapsed {
            self.pop_clip_rect()?;
            self.container_stack.pop();
            self.ids.pop()?;
            return Ok(None);
        }

        self.push_container_body(id, body, opt)?;

        if !opt.contains(WidgetOptions::NO_RESIZE) {
            self.resize_handle(bounds, opt)?;
        }

        if opt.contains(WidgetOptions::AUTO_SIZE) {
            let body = self.layout()?.body();
            let container = self.current_container_mut()?;
            let layout = &mut container.layout;
            let chrome_width = layout.bounds.width() - body.width();
            let chrome_height = layout.bounds.height() - body.height();
            layout.bounds.max.x =
                layout.bounds.min.x + layout.content_size.width + chrome_width;
            layout.bounds.max.y =
                layout.bounds.min.y + layout.content_size.height + chrome_height;
        }

        if opt.contains(WidgetOptions::POPUP)
            && self.pointing.just_pressed()
            && self.hover_root != Some(id)
        {
            self.current_container_mut()?.open = false;
        }

        let layout = self.current_container()?.layout;
        self.push_clip_rect(layout.body_bounds)?;
        Ok(Some(layout))
    }

    /// Closes the window opened by the last successful [`Context::begin_window`].
    pub fn end_window(&mut self) -> Result<(), UiError> {
        self.pop_clip_rect()?;
        self.pop_container_layout()?;
        self.pop_clip_rect()?;
        self.pop_container()?;
        self.ids.pop()?;
        Ok(())
    }

    fn title_bar(
        &mut self,
        window: WidgetId,
        title: &str,
        bar: Rect,
        opt: WidgetOptions,
    ) -> Result<(), UiError> {
        self.draw_frame(bar, ColorRole::TitleBg)?;

        let title_id = self.id_for("!title");
        let label = Rect::new(
            bar.min.x + bar.height() - self.style().padding,
            bar.min.y,
            bar.max.x,
            bar.max.y,
        );
        self.reconcile(title_id, label, opt)?;
        self.draw_widget_text(title, label, ColorRole::TitleText, opt)?;
        if self.focus == title_id && self.pointing.pressed() {
            let moved = self.clamp_to_screen(
                self.current_container()?
                    .layout
                    .bounds
                    .translate(self.pointing.delta()),
                bar.height(),
            );
            self.current_container_mut()?.layout.bounds = moved;
        }

        if !opt.contains(WidgetOptions::NO_CLOSE) {
            let collapse_id = self.id_for("!collapse");
            let button = Rect::new(bar.min.x, bar.min.y, bar.min.x + bar.height(), bar.max.y);
            let collapsed = self.current_container()?.collapsed;
            let icon = if collapsed {
                Icon::Collapsed
            } else {
                Icon::Expanded
            };
            let color = self.style().color(ColorRole::TitleText);
            self.draw_icon(icon, button, color)?;
            self.reconcile(collapse_id, button, opt)?;
            if self.pointing.just_pressed() && self.focus == collapse_id {
                let container = self.current_container_mut()?;
                container.collapsed = !container.collapsed;
                log::debug!("window {window} collapsed: {}", container.collapsed);
            }
        }
        Ok(())
    }

    /// Keeps a dragged window's title bar reachable on screen.
    fn clamp_to_screen(&self, mut bounds: Rect, title_height: i32) -> Rect {
        if let Some(screen) = self.screen_size() {
            if bounds.max.x >= screen.width {
                bounds = bounds.translate(Point::new(screen.width - bounds.max.x, 0));
            }
            let title_bottom = bounds.min.y + title_height;
            if title_bottom >= screen.height - self.style().padding {
                bounds = bounds.translate(Point::new(0, screen.height - title_bottom));
            }
        }
        if bounds.min.x < 0 {
            bounds = bounds.translate(Point::new(-bounds.min.x, 0));
        }
        if bounds.min.y < 0 {
            bounds = bounds.translate(Point::new(0, -bounds.min.y));
        }
        bounds
    }

    fn resize_handle(&mut self, bounds: Rect, opt: WidgetOptions) -> Result<(), UiError> {
        let size = self.style().title_height;
        let id = self.id_for("!resize");
        let handle = Rect::new(
            bounds.max.x - size,
            bounds.max.y - size,
            bounds.max.x,
            bounds.max.y,
        );
        self.reconcile(id, handle, opt)?;
        if self.focus == id && self.pointing.pressed() {
            let delta = self.pointing.delta();
            let screen = self.screen_size();
            let layout = &mut self.current_container_mut()?.layout;
            let width = (layout.bounds.width() + delta.x).max(MIN_WINDOW_WIDTH);
            let height = (layout.bounds.height() + delta.y).max(MIN_WINDOW_HEIGHT);
            let mut max_x = layout.bounds.min.x + width;
            let mut max_y = layout.bounds.min.y + height;
            if let Some(screen) = screen {
                max_x = max_x.min(screen.width);
                max_y = max_y.min(screen.height);
            }
            layout.bounds.max = Point::new(max_x, max_y);
        }
        Ok(())
    }

    /// Declares a popup window. Popups stay closed until
    /// [`Context::open_popup`] and close on a press outside them.
    pub fn popup(&mut self, name: &str, f: impl FnOnce(&mut Context, ContainerLayout)) {
        let opt = WidgetOptions::POPUP
            | WidgetOptions::AUTO_SIZE
            | WidgetOptions::NO_RESIZE
            | WidgetOptions::NO_SCROLL
            | WidgetOptions::NO_TITLE
            | WidgetOptions::CLOSED;
        self.window_with_options(name, Rect::ZERO, opt, f)
    }

    /// Opens the popup `name` at the pointer and raises it.
    pub fn open_popup(&mut self, name: &str) {
        if self.has_error() {
            return;
        }
        let id = Context::window_id(name);
        let position = self.pointing.position();
        if let Some(container) = self.containers.get_or_create(id, true) {
            container.parent = None;
            container.layout.bounds =
                Rect::from_origin_size(position, Size::new(1, 1));
            container.open = true;
        }
        // Hover root now so the popup is not closed by the press that opened it.
        self.next_hover_root = Some(id);
        self.hover_root = Some(id);
        self.containers.bring_to_front(id);
    }

    pub fn close_popup(&mut self, name: &str) {
        if self.has_error() {
            return;
        }
        let id = Context::window_id(name);
        if let Some(container) = self.containers.get_or_create(id, true) {
            container.open = false;
        }
    }

    /// Declares a panel in the next layout cell and runs `f` for its body.
    #[track_caller]
    pub fn panel(&mut self, f: impl FnOnce(&mut Context, ContainerLayout)) {
        let id = self.caller_id();
        self.panel_with_options(id, WidgetOptions::NONE, f)
    }

    pub fn panel_with_options(
        &mut self,
        id: WidgetId,
        opt: WidgetOptions,
        f: impl FnOnce(&mut Context, ContainerLayout),
    ) {
        if self.has_error() {
            return;
        }
        match self.begin_panel(id, opt) {
            Ok(layout) => {
                f(self, layout);
                if let Err(err) = self.end_panel() {
                    self.latch(err);
                }
            }
            Err(err) => self.latch(err),
        }
    }

    /// Opens a panel body; always pair with [`Context::end_panel`] on success.
    pub fn begin_panel(
        &mut self,
        id: WidgetId,
        opt: WidgetOptions,
    ) -> Result<ContainerLayout, UiError> {
        let root = self.current_root_id()?;
        let bounds = self.next_rect()?;
        let container = self
            .containers
            .get_or_create(id, true)
            .ok_or(UiError::EmptyStack {
                stack: StackKind::Container,
            })?;
        container.parent = Some(root);
        container.layout.bounds = bounds;

        self.ids.push_id(id);
        if !opt.contains(WidgetOptions::NO_FRAME) {
            self.draw_frame(bounds, ColorRole::PanelBg)?;
        }
        self.container_stack.push(id);
        self.push_container_body(id, bounds, opt)?;

        let layout = self.current_container()?.layout;
        self.push_clip_rect(layout.body_bounds)?;
        Ok(layout)
    }

    pub fn end_panel(&mut self) -> Result<(), UiError> {
        self.pop_clip_rect()?;
        self.pop_container_layout()?;
        self.pop_container()?;
        self.ids.pop()?;
        Ok(())
    }

    fn pop_container(&mut self) -> Result<WidgetId, UiError> {
        self.container_stack.pop().ok_or(UiError::EmptyStack {
            stack: StackKind::Container,
        })
    }

    /// Lays out scrollbars, then pushes the padded body layout of `id`.
    fn push_container_body(
        &mut self,
        id: WidgetId,
        body: Rect,
        opt: WidgetOptions,
    ) -> Result<(), UiError> {
        let body = if opt.contains(WidgetOptions::NO_SCROLL) {
            body
        } else {
            self.scrollbars(id, body)?
        };
        let padding = self.style().padding;
        let container = self.current_container_mut()?;
        container.layout.body_bounds = body;
        let scroll = container.layout.scroll_offset;
        self.push_layout(body.inset(padding), scroll);
        Ok(())
    }

    fn scrollbars(&mut self, id: WidgetId, body: Rect) -> Result<Rect, UiError> {
        let size = self.style().scrollbar_size;
        let padding = self.style().padding;
        let (content, previous_body) = {
            let layout = &self.current_container()?.layout;
            (layout.content_size, layout.body_bounds)
        };
        let content = Size::new(
            content.width + padding * 2,
            content.height + padding * 2,
        );

        self.push_clip_rect(body)?;
        let mut body = body;
        if content.height > previous_body.height() {
            body.max.x -= size;
        }
        if content.width > previous_body.width() {
            body.max.y -= size;
        }
        self.scrollbar(id, body, content, ScrollAxis::Vertical)?;
        self.scrollbar(id, body, content, ScrollAxis::Horizontal)?;
        self.pop_clip_rect()?;
        Ok(body)
    }

    fn scrollbar(
        &mut self,
        container: WidgetId,
        body: Rect,
        content: Size,
        axis: ScrollAxis,
    ) -> Result<(), UiError> {
        let vertical = axis == ScrollAxis::Vertical;
        let (content_extent, body_extent) = if vertical {
            (content.height, body.height())
        } else {
            (content.width, body.width())
        };
        let max_scroll = content_extent - body_extent;

        if max_scroll <= 0 || body_extent <= 0 {
            let layout = &mut self.current_container_mut()?.layout;
            if vertical {
                layout.scroll_offset.y = 0;
            } else {
                layout.scroll_offset.x = 0;
            }
            return Ok(());
        }

        let size = self.style().scrollbar_size;
        let base = if vertical {
            Rect::new(body.max.x, body.min.y, body.max.x + size, body.max.y)
        } else {
            Rect::new(body.min.x, body.max.y, body.max.x, body.max.y + size)
        };
        let base_extent = if vertical { base.height() } else { base.width() };

        let id = self.id_for(if vertical { "!scrollbar-y" } else { "!scrollbar-x" });
        self.reconcile(id, base, WidgetOptions::NONE)?;
        let dragging = self.focus == id && self.pointing.pressed();
        let delta = self.pointing.delta();

        let offset = {
            let layout = &mut self.current_container_mut()?.layout;
            let offset = if vertical {
                &mut layout.scroll_offset.y
            } else {
                &mut layout.scroll_offset.x
            };
            if dragging {
                let moved = if vertical { delta.y } else { delta.x };
                *offset += moved * content_extent / base_extent;
            }
            *offset = (*offset).clamp(0, max_scroll);
            *offset
        };

        self.draw_frame(base, ColorRole::ScrollBase)?;
        let thumb_extent = self
            .style()
            .thumb_size
            .max(base_extent * body_extent / content_extent);
        let thumb_offset = offset * (base_extent - thumb_extent) / max_scroll;
        let thumb = if vertical {
            let top = base.min.y + thumb_offset;
            Rect::new(base.min.x, top, base.max.x, top + thumb_extent)
        } else {
            let left = base.min.x + thumb_offset;
            Rect::new(left, base.min.y, left + thumb_extent, base.max.y)
        };
        self.draw_frame(thumb, ColorRole::ScrollThumb)?;

        if self.pointer_over(body)? {
            self.scroll_target = Some(container);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
