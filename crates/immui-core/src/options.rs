use std::ops::{BitOr, BitOrAssign};

/// Per-widget and per-container behavior flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WidgetOptions(u16);

impl WidgetOptions {
    pub const NONE: Self = Self(0);
    pub const ALIGN_CENTER: Self = Self(1 << 0);
    pub const ALIGN_RIGHT: Self = Self(1 << 1);
    pub const NO_INTERACT: Self = Self(1 << 2);
    pub const NO_FRAME: Self = Self(1 << 3);
    pub const NO_RESIZE: Self = Self(1 << 4);
    pub const NO_SCROLL: Self = Self(1 << 5);
    pub const NO_CLOSE: Self = Self(1 << 6);
    pub const NO_TITLE: Self = Self(1 << 7);
    pub const HOLD_FOCUS: Self = Self(1 << 8);
    pub const AUTO_SIZE: Self = Self(1 << 9);
    pub const POPUP: Self = Self(1 << 10);
    pub const CLOSED: Self = Self(1 << 11);
    pub const EXPANDED: Self = Self(1 << 12);

    pub fn contains(self, other: WidgetOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: WidgetOptions) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: WidgetOptions) {
        self.0 &= !other.0;
    }
}

impl BitOr for WidgetOptions {
    type Output = WidgetOptions;

    fn bitor(self, rhs: WidgetOptions) -> WidgetOptions {
        WidgetOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for WidgetOptions {
    fn bitor_assign(&mut self, rhs: WidgetOptions) {
        self.0 |= rhs.0;
    }
}

/// What happened to a widget this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Response(u8);

impl Response {
    pub const NONE: Self = Self(0);
    /// The widget is expanded or otherwise showing its content.
    pub const ACTIVE: Self = Self(1 << 0);
    /// The widget was clicked or its edit was committed.
    pub const SUBMIT: Self = Self(1 << 1);
    /// The bound value changed.
    pub const CHANGE: Self = Self(1 << 2);

    pub fn contains(self, other: Response) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn active(self) -> bool {
        self.contains(Response::ACTIVE)
    }

    pub fn submitted(self) -> bool {
        self.contains(Response::SUBMIT)
    }

    pub fn changed(self) -> bool {
        self.contains(Response::CHANGE)
    }
}

impl BitOr for Response {
    type Output = Response;

    fn bitor(self, rhs: Response) -> Response {
        Response(self.0 | rhs.0)
    }
}

impl BitOrAssign for Response {
    fn bitor_assign(&mut self, rhs: Response) {
        self.0 |= rhs.0;
    }
}
