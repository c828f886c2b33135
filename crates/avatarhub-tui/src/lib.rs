//! avatarhub-tui - Terminal UI for AvatarHub
//!
//! This crate provides the ratatui-based dashboard. It drives the TEA loop
//! from avatarhub-app and adds terminal rendering, event polling (keys,
//! mouse clicks, resizes) and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
