//! Retained container state and the registry that owns it.

use immui_graphics::{Point, Rect, Size};

use crate::collections::{WidgetIndexMap, WidgetSet};
use crate::command::Command;
use crate::id::WidgetId;

/// Geometry of a container as seen by client code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContainerLayout {
    /// Outer bounds, including title bar and frame.
    pub bounds: Rect,
    /// Area left for content once the title bar and scrollbars are removed.
    pub body_bounds: Rect,
    /// Extent of the content laid out last frame. May exceed the body, in
    /// which case the container scrolls.
    pub content_size: Size,
    pub scroll_offset: Point,
}

#[derive(Debug)]
pub struct Container {
    id: WidgetId,
    pub(crate) layout: ContainerLayout,
    pub(crate) z_index: u64,
    pub(crate) open: bool,
    pub(crate) collapsed: bool,
    pub(crate) used: bool,
    /// Nearest enclosing root for panels, `None` for windows and popups.
    pub(crate) parent: Option<WidgetId>,
    toggled: WidgetSet,
    pub(crate) commands: Vec<Command>,
}

impl Container {
    fn new(id: WidgetId) -> Self {
        Self {
            id,
            layout: ContainerLayout::default(),
            z_index: 0,
            open: true,
            collapsed: false,
            used: true,
            parent: None,
            toggled: WidgetSet::default(),
            commands: Vec::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn layout(&self) -> &ContainerLayout {
        &self.layout
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_toggled(&self, id: WidgetId) -> bool {
        self.toggled.contains(&id)
    }

    pub fn toggle(&mut self, id: WidgetId) {
        if !self.toggled.remove(&id) {
            self.toggled.insert(id);
        }
    }
}

/// Owns every container, keyed by identity.
///
/// Containers are created on first reference and evicted at the end of any
/// frame in which nothing referenced them.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: WidgetIndexMap<Container>,
    roots: Vec<WidgetId>,
    last_z: u64,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container for `id`, marking it used. Creates it with a
    /// fresh z-index when missing, unless `create` is false.
    pub fn get_or_create(&mut self, id: WidgetId, create: bool) -> Option<&mut Container> {
        if !self.containers.contains_key(&id) {
            if !create {
                return None;
            }
            self.last_z += 1;
            let mut container = Container::new(id);
            container.z_index = self.last_z;
            log::debug!("container {id} created at z {}", self.last_z);
            self.containers.insert(id, container);
        }
        let container = self.containers.get_mut(&id)?;
        container.used = true;
        Some(container)
    }

    pub fn get(&self, id: WidgetId) -> Option<&Container> {
        self.containers.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Container> {
        self.containers.get_mut(&id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.containers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn bring_to_front(&mut self, id: WidgetId) {
        if let Some(container) = self.containers.get_mut(&id) {
            self.last_z += 1;
            container.z_index = self.last_z;
            log::debug!("container {id} brought to front at z {}", self.last_z);
        }
    }

    /// Returns true if no other root sits above `id`.
    pub fn is_topmost(&self, id: WidgetId) -> bool {
        match self.containers.get(&id) {
            Some(container) => self
                .containers
                .values()
                .filter(|other| other.is_root() && other.id != id)
                .all(|other| other.z_index < container.z_index),
            None => false,
        }
    }

    pub fn z_index(&self, id: WidgetId) -> Option<u64> {
        self.containers.get(&id).map(|container| container.z_index)
    }

    /// Removes every container not referenced since the last call and
    /// clears the used marks for the next frame.
    pub fn evict_unused(&mut self) -> usize {
        let before = self.containers.len();
        self.containers.retain(|id, container| {
            if !container.used {
                log::debug!("container {id} evicted");
            }
            container.used
        });
        self.clear_used();
        before - self.containers.len()
    }

    pub(crate) fn clear_used(&mut self) {
        for container in self.containers.values_mut() {
            container.used = false;
        }
    }

    pub(crate) fn clear_commands(&mut self) {
        for container in self.containers.values_mut() {
            container.commands.clear();
        }
    }

    /// Recomputes the root order: ascending z, creation order among equals.
    pub fn sort_roots(&mut self) {
        self.roots.clear();
        self.roots.extend(
            self.containers
                .values()
                .filter(|container| container.is_root())
                .map(|container| container.id),
        );
        let containers = &self.containers;
        self.roots
            .sort_by_key(|id| containers.get(id).map_or(0, |container| container.z_index));
    }

    /// Root containers in the order computed by the last [`Self::sort_roots`].
    pub fn roots(&self) -> impl Iterator<Item = &Container> + '_ {
        self.roots.iter().filter_map(|id| self.containers.get(id))
    }

    /// Every recorded command, back to front.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.roots().flat_map(|container| container.commands.iter())
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
