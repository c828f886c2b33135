//! Centralized theme system for the dashboard.
//!
//! This module provides:
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyphs per `IconMode`, with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

use avatarhub_app::AppState;

use icons::IconSet;
use palette::Palette;

/// Everything a widget needs to pick colors and glyphs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: &'static Palette,
    pub icons: IconSet,
}

impl Theme {
    pub fn new(dark_mode: bool, icons: IconSet) -> Self {
        Self {
            palette: Palette::for_mode(dark_mode),
            icons,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.dark_mode, IconSet::new(state.settings.ui.icons))
    }
}
