//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `keys`: key-to-message mapping per mode
//! - `modal`: create-avatar modal handlers
//! - `click`: pointer target handlers

use crate::message::Message;
use crate::state::{AppState, UiMode, Viewport};
use tracing::{debug, warn};

use super::{click, keys::handle_key, modal, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click(target) => click::handle_click(state, target),

        Message::Resize { width, height } => {
            state.viewport = Viewport { width, height };
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_loading() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Avatar Loading
        // ─────────────────────────────────────────────────────────
        Message::Init => {
            let request = state.begin_load();
            debug!("Starting avatar load {:?}", request);
            UpdateResult::action(UpdateAction::LoadAvatars { request })
        }

        Message::AvatarsLoaded { request, avatars } => {
            let count = avatars.len();
            if state.finish_load(request, avatars) {
                debug!("Loaded {} avatars for {:?}", count, request);
            } else {
                debug!("Discarding stale avatar load {:?}", request);
            }
            UpdateResult::none()
        }

        Message::AvatarsLoadFailed { request, reason } => {
            if state.fail_load(request, reason.clone()) {
                warn!("Avatar load failed: {}", reason);
            } else {
                debug!("Discarding stale load failure {:?}", request);
            }
            UpdateResult::none()
        }

        Message::RetryLoad => {
            if state.load_error().is_some() {
                UpdateResult::message(Message::Init)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Header
        // ─────────────────────────────────────────────────────────
        Message::ToggleDarkMode => {
            state.toggle_dark_mode();
            debug!("Dark mode: {}", state.dark_mode);
            UpdateResult::none()
        }

        Message::ToggleMobileMenu => {
            state.toggle_mobile_menu();
            UpdateResult::none()
        }

        Message::SetMobileMenuOpen(open) => {
            state.mobile_menu_open = open;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Create-Avatar Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateModal => modal::handle_open(state),
        Message::CloseCreateModal => modal::handle_close(state),
        Message::ModalFieldChanged { field, value } => {
            modal::handle_field_changed(state, field, value)
        }
        Message::ModalFocusNext => modal::handle_focus_next(state),
        Message::ModalFocusPrevious => modal::handle_focus_previous(state),
        Message::ModalFocus(focus) => modal::handle_focus(state, focus),
        Message::ModalActivate => modal::handle_activate(state),
        Message::CreateAvatarRequested => modal::handle_create_requested(state),

        // ─────────────────────────────────────────────────────────
        // Avatar Grid
        // ─────────────────────────────────────────────────────────
        Message::MoveSelection(direction) => {
            state.move_selection(direction);
            UpdateResult::none()
        }

        Message::SelectCard(index) => {
            if index < state.visible_avatars().len() {
                state.selected_card = index;
            }
            UpdateResult::none()
        }

        Message::ViewAvatarDetail(id) => {
            debug!("View detail for avatar {} (no detail view)", id);
            UpdateResult::none()
        }

        Message::EditAvatar(id) => {
            debug!("Edit avatar {} (no editor)", id);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.set_search_query(text);
            UpdateResult::none()
        }

        Message::SubmitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.set_search_query(String::new());
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
    }
}
