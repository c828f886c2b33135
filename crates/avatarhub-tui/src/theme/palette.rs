//! Color palettes for light and dark mode.

use ratatui::style::Color;

/// One complete color set. Widgets never hardcode colors; they read them
/// from the active palette so the dark-mode toggle repaints everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,
    pub popup: Color,
    pub backdrop: Color,

    // --- Borders ---
    pub border: Color,
    pub border_focus: Color,

    // --- Accent ---
    pub accent: Color,
    pub on_accent: Color,

    // --- Text ---
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status / stat colors ---
    pub green: Color,
    pub gray: Color,
    pub blue: Color,
    pub purple: Color,
    pub red: Color,
    pub yellow: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251), // gray-50
    surface: Color::Rgb(255, 255, 255),
    popup: Color::Rgb(255, 255, 255),
    backdrop: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    border_focus: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235), // blue-600
    on_accent: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(156, 163, 175),
    green: Color::Rgb(22, 163, 74),
    gray: Color::Rgb(107, 114, 128),
    blue: Color::Rgb(37, 99, 235),
    purple: Color::Rgb(147, 51, 234),
    red: Color::Rgb(220, 38, 38),
    yellow: Color::Rgb(202, 138, 4),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39), // gray-900
    surface: Color::Rgb(31, 41, 55),
    popup: Color::Rgb(31, 41, 55),
    backdrop: Color::Rgb(3, 7, 18),
    border: Color::Rgb(55, 65, 81),
    border_focus: Color::Rgb(96, 165, 250),
    accent: Color::Rgb(59, 130, 246),
    on_accent: Color::Rgb(255, 255, 255),
    text: Color::Rgb(243, 244, 246),
    text_secondary: Color::Rgb(209, 213, 219),
    text_muted: Color::Rgb(107, 114, 128),
    green: Color::Rgb(74, 222, 128),
    gray: Color::Rgb(156, 163, 175),
    blue: Color::Rgb(96, 165, 250),
    purple: Color::Rgb(192, 132, 252),
    red: Color::Rgb(248, 113, 113),
    yellow: Color::Rgb(250, 204, 21),
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}
