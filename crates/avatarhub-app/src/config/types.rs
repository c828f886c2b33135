//! Configuration types for AvatarHub
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub user: UserSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub data: DataSettings,
}

/// Signed-in user shown in the header badge
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserSettings {
    #[serde(default = "default_username")]
    pub username: String,

    /// Picture reference for the user badge
    #[serde(default = "default_badge_image")]
    pub badge_image: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            badge_image: default_badge_image(),
        }
    }
}

fn default_username() -> String {
    "Rohit".to_string()
}

fn default_badge_image() -> String {
    "/bot.png".to_string()
}

/// Icon rendering mode
///
/// Controls whether to use Nerd Font glyphs, plain Unicode symbols, or
/// pure ASCII for terminals with limited fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Unicode symbols that work in most terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
    /// Plain ASCII
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Terminal width (columns) below which the mobile layout is used
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,

    /// Icon mode: "unicode" (default), "nerd_fonts" or "ascii"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            narrow_breakpoint: default_narrow_breakpoint(),
            icons: IconMode::default(),
        }
    }
}

/// Smallest breakpoint accepted; anything lower leaves no room for the nav
pub const MIN_NARROW_BREAKPOINT: u16 = 40;

fn default_narrow_breakpoint() -> u16 {
    100
}

/// Where avatar records come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in seed list
    #[default]
    Seed,
    /// JSON file at `data.path`
    File,
}

/// Avatar data settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataSettings {
    #[serde(default)]
    pub source: SourceKind,

    /// JSON file read when `source = "file"`
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    /// Artificial latency before the initial load resolves
    #[serde(default)]
    pub delay_ms: u64,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            path: default_data_path(),
            delay_ms: 0,
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("avatars.json")
}
