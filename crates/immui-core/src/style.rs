//! Theme: sizes and the color table.

use immui_graphics::Color;

/// Color table slots. Interactive roles are followed by their hover and
/// focus variants, so a role shifted by one or two gives those variants.
#[repr(usize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Text,
    Border,
    WindowBg,
    TitleBg,
    TitleText,
    PanelBg,
    Button,
    ButtonHover,
    ButtonFocus,
    Base,
    BaseHover,
    BaseFocus,
    ScrollBase,
    ScrollThumb,
}

impl ColorRole {
    pub const COUNT: usize = 14;

    pub const ALL: [ColorRole; ColorRole::COUNT] = [
        ColorRole::Text,
        ColorRole::Border,
        ColorRole::WindowBg,
        ColorRole::TitleBg,
        ColorRole::TitleText,
        ColorRole::PanelBg,
        ColorRole::Button,
        ColorRole::ButtonHover,
        ColorRole::ButtonFocus,
        ColorRole::Base,
        ColorRole::BaseHover,
        ColorRole::BaseFocus,
        ColorRole::ScrollBase,
        ColorRole::ScrollThumb,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The role `by` slots further down the table, saturating at the end.
    pub fn shifted(self, by: usize) -> ColorRole {
        ColorRole::ALL[(self.index() + by).min(ColorRole::COUNT - 1)]
    }

    /// Frames in these roles are drawn without a border.
    pub fn is_borderless(self) -> bool {
        matches!(
            self,
            ColorRole::ScrollBase | ColorRole::ScrollThumb | ColorRole::TitleBg
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Width of columns declared as `0`.
    pub default_width: i32,
    /// Height of rows declared as `0`. `None` derives it from the line
    /// height plus vertical padding.
    pub default_height: Option<i32>,
    pub padding: i32,
    pub spacing: i32,
    pub indent: i32,
    pub title_height: i32,
    pub scrollbar_size: i32,
    pub thumb_size: i32,
    /// Units scrolled per wheel notch.
    pub scroll_speed: f32,
    pub colors: [Color; ColorRole::COUNT],
}

impl Style {
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors[role.index()]
    }

    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        self.colors[role.index()] = color;
    }

    pub fn control_height(&self, line_height: i32) -> i32 {
        self.default_height
            .unwrap_or(line_height + self.padding * 2)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            default_width: 60,
            default_height: None,
            padding: 5,
            spacing: 4,
            indent: 24,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            scroll_speed: 30.0,
            colors: [
                Color::rgb(230, 230, 230),
                Color::rgb(25, 25, 25),
                Color::rgb(50, 50, 50),
                Color::rgb(25, 25, 25),
                Color::rgb(240, 240, 240),
                Color::TRANSPARENT,
                Color::rgb(75, 75, 75),
                Color::rgb(95, 95, 95),
                Color::rgb(115, 115, 115),
                Color::rgb(30, 30, 30),
                Color::rgb(35, 35, 35),
                Color::rgb(40, 40, 40),
                Color::rgb(43, 43, 43),
                Color::rgb(30, 30, 30),
            ],
        }
    }
}
