//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::modal::CreateAvatarForm;
use crate::state::{AppState, Direction, UiMode};

/// Convert key events to messages based on current UI mode.
///
/// The modal captures every key while it is open.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(form) = state.modal.form() {
        return handle_key_modal(form, key);
    }

    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the create-avatar modal is open
fn handle_key_modal(form: &CreateAvatarForm, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseCreateModal),
        InputKey::CharCtrl('c') => Some(Message::RequestQuit),

        InputKey::Tab | InputKey::Down => Some(Message::ModalFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::ModalFocusPrevious),
        InputKey::Enter => Some(Message::ModalActivate),

        // Text editing applies to the focused field only
        InputKey::Char(c) => {
            let field = form.focus.field()?;
            let mut value = form.value(field).to_string();
            value.push(c);
            Some(Message::ModalFieldChanged { field, value })
        }
        InputKey::Backspace => {
            let field = form.focus.field()?;
            let mut value = form.value(field).to_string();
            value.pop()?;
            Some(Message::ModalFieldChanged { field, value })
        }
        InputKey::CharCtrl('u') => {
            let field = form.focus.field()?;
            Some(Message::ModalFieldChanged {
                field,
                value: String::new(),
            })
        }

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Drop the filter and return to normal mode
        InputKey::Esc => Some(Message::CancelSearch),

        // Keep the query, exit input mode
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => {
            let mut query = state.search.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::RequestQuit),

        InputKey::Char(c) => {
            let mut query = state.search.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::RequestQuit),

        // Header
        InputKey::Char('d') => Some(Message::ToggleDarkMode),
        InputKey::Char('m') if state.is_narrow() => Some(Message::ToggleMobileMenu),

        // Create-avatar modal
        InputKey::Char('n' | '+') => Some(Message::OpenCreateModal),

        // Search
        InputKey::Char('/') => Some(Message::StartSearch),

        // Grid navigation
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveSelection(Direction::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveSelection(Direction::Right)),
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveSelection(Direction::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveSelection(Direction::Down)),
        InputKey::Home => Some(Message::SelectCard(0)),
        InputKey::End => {
            let last = state.visible_avatars().len().checked_sub(1)?;
            Some(Message::SelectCard(last))
        }

        // Card actions
        InputKey::Char('v') => state
            .selected_avatar()
            .map(|a| Message::ViewAvatarDetail(a.id)),
        InputKey::Char('e') => state.selected_avatar().map(|a| Message::EditAvatar(a.id)),

        // Retry after a failed load
        InputKey::Char('r') if state.load_error().is_some() => Some(Message::RetryLoad),

        _ => None,
    }
}
