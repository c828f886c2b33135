//! Pointer target handlers

use crate::click::ClickTarget;
use crate::message::Message;
use crate::modal::FormFocus;
use crate::state::AppState;

use super::UpdateResult;

/// Route a click to the message its target stands for.
///
/// While the modal is open only modal targets react; the overlay covers the
/// rest of the dashboard. Clicks inside the panel that hit no control are
/// swallowed so they never reach the backdrop's close logic.
pub(crate) fn handle_click(state: &mut AppState, target: ClickTarget) -> UpdateResult {
    if state.is_modal_open() != target.is_modal() {
        return UpdateResult::none();
    }

    match target {
        ClickTarget::MenuToggle => {
            if state.is_narrow() {
                UpdateResult::message(Message::ToggleMobileMenu)
            } else {
                UpdateResult::none()
            }
        }
        ClickTarget::ThemeToggle => UpdateResult::message(Message::ToggleDarkMode),
        ClickTarget::CreateButton => UpdateResult::message(Message::OpenCreateModal),
        ClickTarget::AvatarCard(index) => UpdateResult::message(Message::SelectCard(index)),

        ClickTarget::ModalBackdrop | ClickTarget::ModalClose | ClickTarget::ModalCancel => {
            UpdateResult::message(Message::CloseCreateModal)
        }
        ClickTarget::ModalPanel => UpdateResult::none(),
        ClickTarget::ModalCreate => {
            if let Some(form) = state.modal.form_mut() {
                form.focus = FormFocus::Create;
            }
            UpdateResult::message(Message::CreateAvatarRequested)
        }
        ClickTarget::ModalField(field) => {
            UpdateResult::message(Message::ModalFocus(FormFocus::from(field)))
        }
    }
}
