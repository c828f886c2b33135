//! Application state (Model in TEA pattern)

use avatarhub_core::Avatar;

use crate::config::Settings;
use crate::modal::{CreateAvatarForm, ModalState};
use crate::stats::{dashboard_stats, StatCard};

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Dashboard keys (navigation, toggles, shortcuts)
    #[default]
    Normal,

    /// Search input mode - capturing text for the avatar filter
    SearchInput,
}

/// Token identifying one load attempt.
///
/// Results are only applied when they carry the token of the load that is
/// still pending, so a late answer from an abandoned attempt can't overwrite
/// newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Outcome of the avatar load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the source. `request` is `None` until the load is dispatched.
    Loading { request: Option<RequestId> },

    /// Avatars in source order
    Loaded(Vec<Avatar>),

    /// The source failed; the user may retry
    Failed { request: RequestId, reason: String },
}

/// Last known terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 120,
            height: 40,
        }
    }
}

/// Avatar search filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Direction for moving the card selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Width at which the grid grows from two to three columns, past the breakpoint
const WIDE_GRID_EXTRA: u16 = 40;

/// Number of avatar grid columns for a terminal width
pub fn grid_columns(width: u16, narrow_breakpoint: u16) -> usize {
    if width < narrow_breakpoint {
        1
    } else if width < narrow_breakpoint.saturating_add(WIDE_GRID_EXTRA) {
        2
    } else {
        3
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub settings: Settings,

    /// Name shown in the greeting and the user badge
    pub username: String,

    /// Theme flag; rendering picks the dark palette when set
    pub dark_mode: bool,

    /// Stacked nav panel under the header (narrow layout only)
    pub mobile_menu_open: bool,

    /// Create-avatar modal and its form
    pub modal: ModalState,

    /// Avatar load progress and result
    pub load: LoadState,

    /// Input mode outside the modal
    pub ui_mode: UiMode,

    pub search: SearchState,

    /// Index into the visible (filtered) avatars
    pub selected_card: usize,

    pub viewport: Viewport,

    /// Spinner frame, advanced by ticks while loading
    pub animation_frame: u8,

    quit_requested: bool,
    next_request: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            username: settings.user.username.clone(),
            dark_mode: settings.ui.dark_mode,
            settings,
            mobile_menu_open: false,
            modal: ModalState::Absent,
            load: LoadState::Loading { request: None },
            ui_mode: UiMode::Normal,
            search: SearchState::default(),
            selected_card: 0,
            viewport: Viewport::default(),
            animation_frame: 0,
            quit_requested: false,
            next_request: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Avatar loading
    // ─────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading { .. })
    }

    /// Loaded avatars; empty while loading or after a failure
    pub fn avatars(&self) -> &[Avatar] {
        match &self.load {
            LoadState::Loaded(avatars) => avatars,
            _ => &[],
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Enter `Loading` with a fresh request token
    pub fn begin_load(&mut self) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.load = LoadState::Loading {
            request: Some(request),
        };
        self.animation_frame = 0;
        request
    }

    fn is_pending(&self, request: RequestId) -> bool {
        !self.quit_requested
            && matches!(self.load, LoadState::Loading { request: Some(r) } if r == request)
    }

    /// Apply a successful load. Returns `false` when the result was stale.
    pub fn finish_load(&mut self, request: RequestId, avatars: Vec<Avatar>) -> bool {
        if !self.is_pending(request) {
            return false;
        }
        self.load = LoadState::Loaded(avatars);
        self.clamp_selection();
        true
    }

    /// Apply a failed load. Returns `false` when the result was stale.
    pub fn fail_load(&mut self, request: RequestId, reason: String) -> bool {
        if !self.is_pending(request) {
            return false;
        }
        self.load = LoadState::Failed { request, reason };
        true
    }

    // ─────────────────────────────────────────────────────────
    // Derived view data
    // ─────────────────────────────────────────────────────────

    pub fn stats(&self) -> Vec<StatCard> {
        dashboard_stats(self.avatars())
    }

    /// Avatars matching the search query, in source order
    pub fn visible_avatars(&self) -> Vec<&Avatar> {
        self.avatars()
            .iter()
            .filter(|a| a.matches_query(&self.search.query))
            .collect()
    }

    pub fn selected_avatar(&self) -> Option<&Avatar> {
        self.visible_avatars().get(self.selected_card).copied()
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport.width < self.settings.ui.narrow_breakpoint
    }

    pub fn grid_columns(&self) -> usize {
        grid_columns(self.viewport.width, self.settings.ui.narrow_breakpoint)
    }

    // ─────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Mount the modal with a fresh form. No-op when already open.
    pub fn open_modal(&mut self) {
        if !self.modal.is_open() {
            self.modal = ModalState::Shown(CreateAvatarForm::new());
        }
    }

    /// Unmount the modal, discarding its form
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Absent;
    }

    pub fn move_selection(&mut self, direction: Direction) {
        let len = self.visible_avatars().len();
        if len == 0 {
            self.selected_card = 0;
            return;
        }
        let cols = self.grid_columns();
        let current = self.selected_card.min(len - 1);
        self.selected_card = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(len - 1),
            Direction::Up if current >= cols => current - cols,
            Direction::Down if current + cols < len => current + cols,
            Direction::Up | Direction::Down => current,
        };
    }

    /// Keep the selection inside the visible list
    pub fn clamp_selection(&mut self) {
        let len = self.visible_avatars().len();
        self.selected_card = self.selected_card.min(len.saturating_sub(1));
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search.query = query;
        self.clamp_selection();
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarhub_core::{seed_avatars, AvatarStatus};

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let request = state.begin_load();
        assert!(state.finish_load(request, seed_avatars()));
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AppState::new();
        assert!(state.is_loading());
        assert!(state.avatars().is_empty());
        assert!(!state.is_modal_open());
        assert!(!state.dark_mode);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.username, "Rohit");
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_applies_user_and_theme() {
        let mut settings = Settings::default();
        settings.user.username = "Priya".to_string();
        settings.ui.dark_mode = true;

        let state = AppState::with_settings(settings);
        assert_eq!(state.username, "Priya");
        assert!(state.dark_mode);
    }

    #[test]
    fn test_finish_load_preserves_order() {
        let state = loaded_state();
        assert!(!state.is_loading());
        assert_eq!(state.avatars(), seed_avatars().as_slice());
    }

    #[test]
    fn test_stale_request_is_ignored() {
        let mut state = AppState::new();
        let first = state.begin_load();
        let second = state.begin_load();
        assert_ne!(first, second);

        assert!(!state.finish_load(first, seed_avatars()));
        assert!(state.is_loading());

        assert!(state.finish_load(second, seed_avatars()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_result_after_quit_is_discarded() {
        let mut state = AppState::new();
        let request = state.begin_load();
        state.request_quit();

        assert!(!state.finish_load(request, seed_avatars()));
        assert!(state.is_loading());
    }

    #[test]
    fn test_fail_load_records_reason() {
        let mut state = AppState::new();
        let request = state.begin_load();
        assert!(state.fail_load(request, "disk on fire".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.load_error(), Some("disk on fire"));
        assert!(state.avatars().is_empty());
    }

    #[test]
    fn test_result_after_completion_is_ignored() {
        let mut state = loaded_state();
        assert!(!state.fail_load(RequestId(1), "late".to_string()));
        assert_eq!(state.avatars().len(), 3);
    }

    #[test]
    fn test_open_modal_twice_keeps_form() {
        let mut state = AppState::new();
        state.open_modal();
        if let Some(form) = state.modal.form_mut() {
            form.name = "draft".to_string();
        }
        state.open_modal();
        assert_eq!(state.modal.form().map(|f| f.name.as_str()), Some("draft"));
    }

    #[test]
    fn test_grid_columns_by_width() {
        assert_eq!(grid_columns(80, 100), 1);
        assert_eq!(grid_columns(100, 100), 2);
        assert_eq!(grid_columns(139, 100), 2);
        assert_eq!(grid_columns(140, 100), 3);
    }

    #[test]
    fn test_move_selection_in_grid() {
        let mut state = loaded_state();
        state.viewport = Viewport {
            width: 150,
            height: 40,
        };
        assert_eq!(state.grid_columns(), 3);

        state.move_selection(Direction::Right);
        state.move_selection(Direction::Right);
        state.move_selection(Direction::Right);
        assert_eq!(state.selected_card, 2);

        state.move_selection(Direction::Down);
        assert_eq!(state.selected_card, 2);

        state.move_selection(Direction::Left);
        assert_eq!(state.selected_card, 1);
    }

    #[test]
    fn test_move_selection_single_column() {
        let mut state = loaded_state();
        state.viewport = Viewport {
            width: 60,
            height: 40,
        };
        state.move_selection(Direction::Down);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_card, 2);
        state.move_selection(Direction::Up);
        assert_eq!(state.selected_card, 1);
    }

    #[test]
    fn test_search_filters_visible_and_clamps() {
        let mut state = loaded_state();
        state.selected_card = 2;
        state.set_search_query("kids".to_string());

        let visible = state.visible_avatars();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description, "Sam");
        assert_eq!(state.selected_card, 0);

        // Stats always reflect the full list
        assert_eq!(state.stats()[0].value.to_string(), "3");
    }

    #[test]
    fn test_selected_avatar() {
        let mut state = loaded_state();
        state.viewport.width = 150;
        state.move_selection(Direction::Right);
        assert_eq!(state.selected_avatar().map(|a| a.id.0), Some(2));
    }

    #[test]
    fn test_stats_follow_loaded_statuses() {
        let mut state = AppState::new();
        let request = state.begin_load();
        state.finish_load(
            request,
            vec![
                Avatar::new(1, "A", "a", AvatarStatus::Active),
                Avatar::new(2, "B", "b", AvatarStatus::Inactive),
            ],
        );
        let stats = state.stats();
        assert_eq!(stats[0].value.to_string(), "2");
        assert_eq!(stats[1].value.to_string(), "1");
    }

    #[test]
    fn test_is_narrow_uses_breakpoint() {
        let mut state = AppState::new();
        state.viewport.width = 99;
        assert!(state.is_narrow());
        state.viewport.width = 100;
        assert!(!state.is_narrow());
    }
}
