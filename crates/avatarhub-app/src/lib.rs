//! avatarhub-app - Application state and orchestration for AvatarHub
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: a single [`AppState`] owns every piece of view state, the
//! [`handler::update`] function is its only writer, and presentation layers
//! (the TUI, headless mode) read snapshots of it and feed back [`Message`]s.
//!
//! It also carries configuration loading, the avatar data sources and the
//! background load action.

pub mod actions;
pub mod click;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod process;
pub mod snapshot;
pub mod source;
pub mod state;
pub mod stats;

// Re-export primary types
pub use actions::AvatarLoader;
pub use click::ClickTarget;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use modal::{CreateAvatarForm, FormField, FormFocus, ModalState};
pub use snapshot::DashboardSnapshot;
pub use state::{AppState, LoadState, RequestId, UiMode};
