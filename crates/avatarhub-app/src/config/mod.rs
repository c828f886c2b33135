//! Configuration file parsing for AvatarHub
//!
//! Supports `config.toml`, looked up at an explicit `--config` path or at
//! `<config dir>/avatarhub/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;
