//! Avatar search prompt, shown on the section line

use avatarhub_app::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Theme};

pub const SEARCH_HINT: &str = "Search avatars";

/// Search prompt widget
pub struct SearchBar<'a> {
    search: &'a SearchState,
    /// Capturing keystrokes
    active: bool,
    theme: Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchState, theme: Theme) -> Self {
        Self {
            search,
            active: false,
            theme,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Columns needed to draw the current content
    pub fn width(&self) -> u16 {
        self.line().width() as u16
    }

    fn line(&self) -> Line<'a> {
        let p = self.theme.palette;
        let icon = Span::styled(self.theme.icons.search(), styles::accent_bold(p));

        // Format: "/query_" while typing, "query" once submitted
        if self.active {
            return Line::from(vec![
                icon,
                Span::raw(" "),
                Span::styled("/", styles::keybinding(p)),
                Span::styled(self.search.query.as_str(), styles::text(p)),
                Span::styled(
                    "_",
                    Style::default()
                        .fg(p.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ]);
        }

        if self.search.is_empty() {
            Line::from(vec![
                icon,
                Span::raw(" "),
                Span::styled(SEARCH_HINT, styles::text_muted(p)),
                Span::raw(" "),
                Span::styled("/", styles::keybinding(p)),
            ])
        } else {
            Line::from(vec![
                icon,
                Span::raw(" "),
                Span::styled(self.search.query.as_str(), styles::text_bold(p)),
            ])
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
