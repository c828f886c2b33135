//! Create-avatar modal handlers

use crate::message::Message;
use crate::modal::{FormField, FormFocus};
use crate::state::AppState;
use tracing::debug;

use super::UpdateResult;

pub(crate) fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_modal();
    UpdateResult::none()
}

/// Close via the X control, Cancel or the backdrop; the form is dropped
pub(crate) fn handle_close(state: &mut AppState) -> UpdateResult {
    state.close_modal();
    UpdateResult::none()
}

pub(crate) fn handle_field_changed(
    state: &mut AppState,
    field: FormField,
    value: String,
) -> UpdateResult {
    if let Some(form) = state.modal.form_mut() {
        form.set_field(field, value);
    }
    UpdateResult::none()
}

pub(crate) fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.modal.form_mut() {
        form.focus_next();
    }
    UpdateResult::none()
}

pub(crate) fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.modal.form_mut() {
        form.focus_prev();
    }
    UpdateResult::none()
}

pub(crate) fn handle_focus(state: &mut AppState, focus: FormFocus) -> UpdateResult {
    if let Some(form) = state.modal.form_mut() {
        form.focus = focus;
    }
    UpdateResult::none()
}

/// Enter on the focused element: fields advance, buttons fire
pub(crate) fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.modal.form_mut() else {
        return UpdateResult::none();
    };
    match form.focus {
        FormFocus::Name | FormFocus::Description | FormFocus::Type => {
            form.focus_next();
            UpdateResult::none()
        }
        FormFocus::Cancel => UpdateResult::message(Message::CloseCreateModal),
        FormFocus::Create => UpdateResult::message(Message::CreateAvatarRequested),
    }
}

/// "Create Avatar" has no submission path: the modal stays open and the
/// avatar list is untouched.
pub(crate) fn handle_create_requested(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.modal.form() {
        debug!(
            "Create avatar requested (not wired): {} validation issue(s)",
            form.validate().len()
        );
    }
    UpdateResult::none()
}
