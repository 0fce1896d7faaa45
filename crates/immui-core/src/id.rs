//! Widget identity.
//!
//! Identity is derived every frame from the current scope stack and a leaf
//! token. The same stack and the same leaf always produce the same
//! [`WidgetId`], within a frame and across frames. Distinct declarations
//! that hash alike collide silently; callers disambiguate with scopes.

use std::fmt;
use std::panic::Location;

use crate::error::{StackKind, UiError};
use crate::hash::hash_seeded;

/// Opaque identifier of a widget or container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Identifier of widgets that never interact (labels, layout cells).
    pub const EMPTY: WidgetId = WidgetId(0);

    /// Identifier derived from `leaf` alone, ignoring the scope stack.
    pub fn global<'a>(leaf: impl Into<IdSource<'a>>) -> WidgetId {
        WidgetId::EMPTY.child(leaf)
    }

    /// Identifier of `leaf` scoped under `self`.
    pub fn child<'a>(self, leaf: impl Into<IdSource<'a>>) -> WidgetId {
        let raw = hash_seeded(self.0, &leaf.into());
        // Zero is reserved for EMPTY.
        WidgetId(if raw == 0 { 1 } else { raw })
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self == WidgetId::EMPTY
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:016x}", self.0)
    }
}

/// Leaf token hashed into a [`WidgetId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdSource<'a> {
    /// A source location, usually captured with `#[track_caller]`.
    Location {
        file: &'a str,
        line: u32,
        column: u32,
    },
    /// An explicit string key.
    Str(&'a str),
    /// The address of a value bound to the widget.
    Ptr(usize),
    /// A caller-supplied number, e.g. a loop index.
    Hashed(u64),
}

impl IdSource<'static> {
    /// Token of the location that called the current `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        location_key(location.file(), location.line(), location.column())
    }
}

impl<'a> IdSource<'a> {
    /// Token of the address of `value`. Only meaningful while the value
    /// stays at the same place between frames.
    pub fn of_ref<T: ?Sized>(value: &T) -> Self {
        IdSource::Ptr(value as *const T as *const () as usize)
    }
}

/// Explicit call-site token, for use with `file!()`, `line!()` and `column!()`.
pub fn location_key(file: &str, line: u32, column: u32) -> IdSource<'_> {
    IdSource::Location { file, line, column }
}

impl<'a> From<&'a str> for IdSource<'a> {
    fn from(value: &'a str) -> Self {
        IdSource::Str(value)
    }
}

impl<'a> From<&'a String> for IdSource<'a> {
    fn from(value: &'a String) -> Self {
        IdSource::Str(value.as_str())
    }
}

impl From<u64> for IdSource<'static> {
    fn from(value: u64) -> Self {
        IdSource::Hashed(value)
    }
}

impl From<usize> for IdSource<'static> {
    fn from(value: usize) -> Self {
        IdSource::Hashed(value as u64)
    }
}

impl From<i32> for IdSource<'static> {
    fn from(value: i32) -> Self {
        IdSource::Hashed(value as u64)
    }
}

impl From<WidgetId> for IdSource<'static> {
    fn from(value: WidgetId) -> Self {
        IdSource::Hashed(value.0)
    }
}

/// Stack of scope identifiers. Each entry is already combined with the
/// entry below it, so the top alone seeds the next leaf.
#[derive(Debug, Default)]
pub(crate) struct IdStack {
    scopes: Vec<WidgetId>,
}

impl IdStack {
    pub(crate) fn top(&self) -> WidgetId {
        self.scopes.last().copied().unwrap_or(WidgetId::EMPTY)
    }

    pub(crate) fn id_for<'a>(&self, leaf: impl Into<IdSource<'a>>) -> WidgetId {
        self.top().child(leaf)
    }

    pub(crate) fn push_id(&mut self, id: WidgetId) {
        self.scopes.push(id);
    }

    pub(crate) fn push<'a>(&mut self, leaf: impl Into<IdSource<'a>>) -> WidgetId {
        let id = self.id_for(leaf);
        self.scopes.push(id);
        id
    }

    pub(crate) fn pop(&mut self) -> Result<WidgetId, UiError> {
        self.scopes.pop().ok_or(UiError::EmptyStack {
            stack: StackKind::Id,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.scopes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.scopes.clear();
    }
}

#[cfg(test)]
#[path = "tests/id_tests.rs"]
mod tests;
