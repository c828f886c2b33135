//! Screen layout definitions for the TUI
//!
//! Rendering and mouse hit testing both derive their rectangles from the
//! functions here, so a click always lands on what was drawn.

use avatarhub_app::{AppState, ClickTarget, FormField};
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::theme::Theme;
use crate::widgets::header_branding;
use crate::widgets::modal_overlay::centered_rect;

pub const HEADER_HEIGHT: u16 = 3;
/// Border + three nav entries + user badge + border
pub const MOBILE_MENU_HEIGHT: u16 = 6;
pub const FOOTER_HEIGHT: u16 = 1;
/// Title + greeting + spacer
pub const INTRO_HEIGHT: u16 = 3;
pub const BANNER_HEIGHT: u16 = 3;
pub const STAT_CARD_HEIGHT: u16 = 4;
/// Heading + count/search line
pub const SECTION_HEIGHT: u16 = 2;
pub const CARD_HEIGHT: u16 = 7;

pub const THEME_TOGGLE_WIDTH: u16 = 9;
pub const MENU_TOGGLE_WIDTH: u16 = 3;
pub const FAB_LABEL: &str = "[ + ]";

pub const MODAL_WIDTH: u16 = 56;
pub const MODAL_HEIGHT: u16 = 22;
pub const CANCEL_LABEL: &str = "[ Cancel ]";
pub const CREATE_LABEL: &str = "[ Create Avatar ]";
pub const CLOSE_LABEL: &str = "[X]";

/// Screen areas for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardAreas {
    pub header: Rect,
    /// Stacked nav panel, present only when the narrow menu is open
    pub mobile_menu: Option<Rect>,
    /// Title and greeting
    pub intro: Rect,
    /// Load-failure banner, present only after a failed load
    pub banner: Option<Rect>,
    /// One rect per stat card
    pub stats: Vec<Rect>,
    /// "Your AI Avatars" heading and count line
    pub section: Rect,
    pub grid: Rect,
    /// Floating create button, bottom-right of the grid
    pub fab: Rect,
    pub footer: Rect,
}

/// Clickable parts of the header row
#[derive(Debug, Clone, Copy)]
pub struct HeaderAreas {
    pub inner: Rect,
    /// Absent when the row is too cramped to fit it past the branding
    pub theme_toggle: Option<Rect>,
    /// Only exists in the narrow layout
    pub menu_toggle: Option<Rect>,
}

/// Areas of the create-avatar modal
#[derive(Debug, Clone, Copy)]
pub struct ModalAreas {
    pub panel: Rect,
    pub title: Rect,
    pub close: Rect,
    /// Label + input box per field, in focus order
    pub fields: [(FormField, Rect); 3],
    pub upload: Rect,
    pub issues: Rect,
    pub cancel: Rect,
    pub create: Rect,
}

/// Create the dashboard layout for the current state
pub fn dashboard(area: Rect, state: &AppState) -> DashboardAreas {
    let narrow = state.is_narrow();
    let menu_open = narrow && state.mobile_menu_open;

    let mut outer = vec![Constraint::Length(HEADER_HEIGHT)];
    if menu_open {
        outer.push(Constraint::Length(MOBILE_MENU_HEIGHT));
    }
    outer.push(Constraint::Min(0));
    outer.push(Constraint::Length(FOOTER_HEIGHT));
    let chunks = Layout::vertical(outer).split(area);

    let header = chunks[0];
    let (mobile_menu, main) = if menu_open {
        (Some(chunks[1]), chunks[2])
    } else {
        (None, chunks[1])
    };
    let footer = chunks[chunks.len() - 1];

    let content = main.inner(Margin::new(1, 0));
    let has_banner = state.load_error().is_some();
    let stats_height = if narrow {
        STAT_CARD_HEIGHT * 3
    } else {
        STAT_CARD_HEIGHT
    };

    let mut rows = vec![Constraint::Length(INTRO_HEIGHT)];
    if has_banner {
        rows.push(Constraint::Length(BANNER_HEIGHT));
    }
    rows.push(Constraint::Length(stats_height));
    rows.push(Constraint::Length(SECTION_HEIGHT));
    rows.push(Constraint::Min(0));
    let rows = Layout::vertical(rows).split(content);

    let intro = rows[0];
    let offset = usize::from(has_banner);
    let banner = has_banner.then(|| rows[1]);
    let stats_area = rows[1 + offset];
    let section = rows[2 + offset];
    let grid = rows[3 + offset];

    let stats = if narrow {
        Layout::vertical([Constraint::Length(STAT_CARD_HEIGHT); 3])
            .split(stats_area)
            .to_vec()
    } else {
        Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .split(stats_area)
            .to_vec()
    };

    DashboardAreas {
        header,
        mobile_menu,
        intro,
        banner,
        stats,
        section,
        grid,
        fab: fab(grid),
        footer,
    }
}

fn fab(grid: Rect) -> Rect {
    let width = FAB_LABEL.len() as u16;
    if grid.height == 0 || grid.width <= width {
        return Rect::default();
    }
    Rect::new(grid.right() - width - 1, grid.bottom() - 1, width, 1)
}

/// Locate the toggles on the header's content row.
///
/// `branding_width` is the width of the left-hand content. A toggle that
/// would overlap it is left out.
pub fn header(area: Rect, narrow: bool, branding_width: u16) -> HeaderAreas {
    let inner = area.inner(Margin::new(1, 1));
    let row_y = inner.y;
    let free_x = inner.x.saturating_add(branding_width);

    let place = |right: u16, width: u16| {
        let x = right.checked_sub(width + 1)?;
        (inner.height > 0 && x >= free_x).then(|| Rect::new(x, row_y, width, 1))
    };

    let theme_toggle = place(inner.right(), THEME_TOGGLE_WIDTH);
    let menu_toggle = if narrow {
        place(theme_toggle.map_or(inner.right(), |r| r.x), MENU_TOGGLE_WIDTH)
    } else {
        None
    };

    HeaderAreas {
        inner,
        theme_toggle,
        menu_toggle,
    }
}

/// [`header`] with the branding width the header widget draws for `state`
pub fn header_for(area: Rect, state: &AppState) -> HeaderAreas {
    let narrow = state.is_narrow();
    let branding = header_branding(Theme::from_state(state), narrow);
    header(area, narrow, branding.width() as u16)
}

/// Card rectangles visible in the grid, paired with their index into the
/// visible avatar list.
///
/// Rows scroll so the selected card stays on screen.
pub fn card_rects(
    grid: Rect,
    columns: usize,
    count: usize,
    selected: usize,
) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    if count == 0 || grid.height == 0 || grid.width == 0 {
        return Vec::new();
    }

    let visible_rows = usize::from((grid.height / CARD_HEIGHT).max(1));
    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let mut rects = Vec::new();
    for (slot, row) in (first_row..first_row + visible_rows).enumerate() {
        let y = grid.y + (slot as u16) * CARD_HEIGHT;
        if y >= grid.bottom() {
            break;
        }
        let height = CARD_HEIGHT.min(grid.bottom() - y);
        let row_area = Rect::new(grid.x, y, grid.width, height);
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if index >= count {
                return rects;
            }
            rects.push((index, *cell));
        }
    }
    rects
}

/// Create the modal layout, centered in `area`
pub fn modal(area: Rect) -> ModalAreas {
    let panel = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    let inner = panel.inner(Margin::new(2, 1));

    let rows = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // spacer
        Constraint::Length(4), // name
        Constraint::Length(4), // description
        Constraint::Length(4), // type
        Constraint::Length(3), // upload
        Constraint::Length(1), // issues
        Constraint::Length(1), // buttons
        Constraint::Min(0),
    ])
    .split(inner);

    let title = rows[0];
    let close_width = CLOSE_LABEL.len() as u16;
    let close = Rect::new(
        title.right().saturating_sub(close_width),
        title.y,
        close_width.min(title.width),
        title.height,
    );

    let buttons = rows[7];
    let create_width = (CREATE_LABEL.len() as u16).min(buttons.width);
    let create = Rect::new(
        buttons.right() - create_width,
        buttons.y,
        create_width,
        buttons.height,
    );
    let cancel_width = CANCEL_LABEL.len() as u16;
    let cancel_x = create.x.saturating_sub(cancel_width + 2).max(buttons.x);
    let cancel = Rect::new(
        cancel_x,
        buttons.y,
        cancel_width.min(create.x.saturating_sub(cancel_x)),
        buttons.height,
    );

    ModalAreas {
        panel,
        title,
        close,
        fields: [
            (FormField::Name, rows[2]),
            (FormField::Description, rows[3]),
            (FormField::Type, rows[4]),
        ],
        upload: rows[5],
        issues: rows[6],
        cancel,
        create,
    }
}

/// Map a click at (`column`, `row`) to what is drawn there.
///
/// While the modal is open every click resolves to a modal target: controls
/// first, then the panel body, then the backdrop.
pub fn hit_test(state: &AppState, area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    let pos = Position::new(column, row);
    if !area.contains(pos) {
        return None;
    }

    if state.is_modal_open() {
        let m = modal(area);
        if m.close.contains(pos) {
            return Some(ClickTarget::ModalClose);
        }
        if m.cancel.contains(pos) {
            return Some(ClickTarget::ModalCancel);
        }
        if m.create.contains(pos) {
            return Some(ClickTarget::ModalCreate);
        }
        if let Some((field, _)) = m.fields.iter().find(|(_, r)| r.contains(pos)) {
            return Some(ClickTarget::ModalField(*field));
        }
        if m.panel.contains(pos) {
            return Some(ClickTarget::ModalPanel);
        }
        return Some(ClickTarget::ModalBackdrop);
    }

    let areas = dashboard(area, state);

    let header = header_for(areas.header, state);
    if header.theme_toggle.is_some_and(|r| r.contains(pos)) {
        return Some(ClickTarget::ThemeToggle);
    }
    if header.menu_toggle.is_some_and(|r| r.contains(pos)) {
        return Some(ClickTarget::MenuToggle);
    }

    if areas.fab.contains(pos) {
        return Some(ClickTarget::CreateButton);
    }

    card_rects(
        areas.grid,
        state.grid_columns(),
        state.visible_avatars().len(),
        state.selected_card,
    )
    .into_iter()
    .find(|(_, r)| r.contains(pos))
    .map(|(index, _)| ClickTarget::AvatarCard(index))
}
