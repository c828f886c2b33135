//! Semantic style builders.

use avatarhub_app::stats::StatColor;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_bold(p: &Palette) -> Style {
    text(p).add_modifier(Modifier::BOLD)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Key letter inside a `[k]` hint
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.yellow).add_modifier(Modifier::BOLD)
}

/// Solid pill, e.g. the "AI" badge
pub fn badge(p: &Palette) -> Style {
    Style::default()
        .fg(p.on_accent)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn button(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(p.on_accent)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.text_secondary)
    }
}

pub fn error(p: &Palette) -> Style {
    Style::default().fg(p.red).add_modifier(Modifier::BOLD)
}

// --- Status ---

/// Green for active, gray for everything else
pub fn status_color(p: &Palette, active: bool) -> Color {
    if active {
        p.green
    } else {
        p.gray
    }
}

pub fn stat_color(p: &Palette, color: StatColor) -> Color {
    match color {
        StatColor::Blue => p.blue,
        StatColor::Green => p.green,
        StatColor::Purple => p.purple,
        StatColor::Gray => p.gray,
    }
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_focus
        } else {
            p.border
        }))
        .style(Style::default().bg(p.surface))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_focus))
        .style(Style::default().bg(p.popup))
}
