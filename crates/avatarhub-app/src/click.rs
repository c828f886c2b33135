//! Pointer targets, independent of terminal library.
//!
//! The TUI resolves a mouse position to a `ClickTarget` using its layout
//! (see `avatarhub_tui::layout::hit_test`); the app layer only ever sees the
//! semantic target.

use crate::modal::FormField;

/// Something on screen that reacts to a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The mobile menu toggle button (narrow layout only)
    MenuToggle,
    /// The light/dark theme indicator in the header
    ThemeToggle,
    /// The floating "+" button
    CreateButton,
    /// An avatar card in the grid (index into the visible avatars)
    AvatarCard(usize),

    /// Overlay area around the modal panel
    ModalBackdrop,
    /// Any part of the modal panel without its own handler
    ModalPanel,
    /// The `[X]` control in the modal title
    ModalClose,
    /// The "Cancel" button
    ModalCancel,
    /// The "Create Avatar" button
    ModalCreate,
    /// One of the form inputs
    ModalField(FormField),
}

impl ClickTarget {
    /// Whether this target belongs to the create-avatar modal
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            ClickTarget::ModalBackdrop
                | ClickTarget::ModalPanel
                | ClickTarget::ModalClose
                | ClickTarget::ModalCancel
                | ClickTarget::ModalCreate
                | ClickTarget::ModalField(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_targets_are_classified() {
        assert!(ClickTarget::ModalBackdrop.is_modal());
        assert!(ClickTarget::ModalField(FormField::Type).is_modal());
        assert!(!ClickTarget::CreateButton.is_modal());
        assert!(!ClickTarget::AvatarCard(0).is_modal());
    }
}
