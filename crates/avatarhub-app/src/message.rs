//! Message types for the application (TEA pattern)

use avatarhub_core::{Avatar, AvatarId};

use crate::click::ClickTarget;
use crate::input_key::InputKey;
use crate::modal::{FormField, FormFocus};
use crate::state::{Direction, RequestId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer click resolved to a target by the presentation layer
    Click(ClickTarget),

    /// Terminal resized
    Resize { width: u16, height: u16 },

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Request to quit
    RequestQuit,

    // ─────────────────────────────────────────────────────────
    // Avatar Loading
    // ─────────────────────────────────────────────────────────
    /// Dashboard mounted; start the initial load
    Init,
    /// Load finished
    AvatarsLoaded {
        request: RequestId,
        avatars: Vec<Avatar>,
    },
    /// Load failed
    AvatarsLoadFailed { request: RequestId, reason: String },
    /// Retry after a failed load
    RetryLoad,

    // ─────────────────────────────────────────────────────────
    // Header
    // ─────────────────────────────────────────────────────────
    ToggleDarkMode,
    /// Flip the mobile menu (the toggle button)
    ToggleMobileMenu,
    SetMobileMenuOpen(bool),

    // ─────────────────────────────────────────────────────────
    // Create-Avatar Modal
    // ─────────────────────────────────────────────────────────
    OpenCreateModal,
    CloseCreateModal,
    /// A form field was edited; only that field changes
    ModalFieldChanged { field: FormField, value: String },
    ModalFocusNext,
    ModalFocusPrevious,
    ModalFocus(FormFocus),
    /// Enter on the focused element
    ModalActivate,
    /// "Create Avatar" pressed (no submission path yet)
    CreateAvatarRequested,

    // ─────────────────────────────────────────────────────────
    // Avatar Grid
    // ─────────────────────────────────────────────────────────
    MoveSelection(Direction),
    SelectCard(usize),
    /// Card "view detail" affordance (inert)
    ViewAvatarDetail(AvatarId),
    /// Card "edit" affordance (inert)
    EditAvatar(AvatarId),

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    StartSearch,
    SearchInput { text: String },
    /// Keep the query and leave input mode
    SubmitSearch,
    /// Clear the query and leave input mode
    CancelSearch,
}
