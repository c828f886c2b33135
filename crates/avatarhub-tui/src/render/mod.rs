//! Main render/view function (View in TEA pattern)


use avatarhub_app::state::{AppState, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{styles, Theme};

pub const DASHBOARD_TITLE: &str = "AI Avatar Dashboard";
pub const SECTION_TITLE: &str = "Your AI Avatars";

/// Shortcut hints under the greeting
const KEY_HINTS: [(&str, &str); 5] = [
    ("n", "New avatar"),
    ("/", "Search"),
    ("d", "Theme"),
    ("←↑↓→", "Select"),
    ("q", "Quit"),
];

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = Theme::from_state(state);
    let p = theme.palette;

    // Fill entire terminal with the page background
    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    let areas = layout::dashboard(area, state);
    let narrow = state.is_narrow();

    let badge_image = &state.settings.user.badge_image;
    let header = widgets::DashboardHeader::new(&state.username, theme)
        .badge_image(badge_image)
        .dark_mode(state.dark_mode)
        .narrow(narrow, state.mobile_menu_open);
    frame.render_widget(header, areas.header);

    if let Some(menu_area) = areas.mobile_menu {
        let menu = widgets::MobileMenu::new(&state.username, theme).badge_image(badge_image);
        frame.render_widget(menu, menu_area);
    }

    render_intro(frame, areas.intro, state, theme);

    if let (Some(banner), Some(reason)) = (areas.banner, state.load_error()) {
        render_error_banner(frame, banner, reason, theme);
    }

    let stats = state.stats();
    for (card, rect) in stats.iter().zip(areas.stats.iter()) {
        frame.render_widget(widgets::StatsCard::new(card, theme), *rect);
    }

    render_section(frame, areas.section, state, theme);

    let visible = state.visible_avatars();
    let grid = widgets::AvatarGrid::new(&visible, state.grid_columns(), theme)
        .selected(state.selected_card)
        .loading(state.is_loading(), state.animation_frame)
        .query(&state.search.query);
    frame.render_widget(grid, areas.grid);

    if areas.fab.width > 0 {
        let fab = Line::styled(layout::FAB_LABEL, styles::button(p, true));
        frame.render_widget(Paragraph::new(fab), areas.fab);
    }

    frame.render_widget(widgets::Footer::new(theme), areas.footer);

    // Modal last so it covers everything
    if let Some(form) = state.modal.form() {
        frame.render_widget(widgets::CreateModal::new(form, theme), area);
    }
}

fn render_intro(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let p = theme.palette;

    let mut hints = Vec::new();
    for (i, (key, label)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            hints.push(Span::raw("  "));
        }
        hints.push(Span::styled(format!("[{key}]"), styles::keybinding(p)));
        hints.push(Span::styled(format!(" {label}"), styles::text_muted(p)));
    }

    let lines = vec![
        Line::styled(DASHBOARD_TITLE, styles::text_bold(p)),
        Line::styled(
            format!(
                "Welcome back, {}! Manage your AI avatars here.",
                state.username
            ),
            styles::text_secondary(p),
        ),
        Line::from(hints),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, reason: &str, theme: Theme) {
    let p = theme.palette;
    let block = styles::glass_block(p, false).border_style(Style::default().fg(p.red));
    let line = Line::from(vec![
        Span::styled(theme.icons.alert(), styles::error(p)),
        Span::raw(" "),
        Span::styled(format!("Failed to load avatars: {reason}"), styles::error(p)),
        Span::raw("  "),
        Span::styled("[r]", styles::keybinding(p)),
        Span::styled(" Retry", styles::text_muted(p)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_section(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    if area.height == 0 {
        return;
    }
    let p = theme.palette;

    frame.render_widget(
        Paragraph::new(Line::styled(SECTION_TITLE, styles::text_bold(p))),
        Rect::new(area.x, area.y, area.width, 1),
    );
    if area.height < 2 {
        return;
    }

    let row = Rect::new(area.x, area.y + 1, area.width, 1);
    // Count covers the full list, not the search result
    let count = Line::styled(
        format!("{} avatars available", state.avatars().len()),
        styles::text_secondary(p),
    );
    let count_width = count.width() as u16;
    frame.render_widget(Paragraph::new(count), row);

    let bar = widgets::SearchBar::new(&state.search, theme)
        .active(state.ui_mode == UiMode::SearchInput);
    let bar_width = bar.width().min(row.width);
    if row.width > count_width + bar_width + 2 {
        let bar_area = Rect::new(row.right() - bar_width, row.y, bar_width, 1);
        frame.render_widget(bar, bar_area);
    }
}
