//! Avatar grid: loading spinner, empty states and the card layout

use avatarhub_core::Avatar;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::{styles, Theme};

use super::AvatarCard;

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading avatars...";

pub struct AvatarGrid<'a> {
    avatars: &'a [&'a Avatar],
    selected: usize,
    columns: usize,
    loading: bool,
    query: &'a str,
    animation_frame: u8,
    theme: Theme,
}

impl<'a> AvatarGrid<'a> {
    pub fn new(avatars: &'a [&'a Avatar], columns: usize, theme: Theme) -> Self {
        Self {
            avatars,
            selected: 0,
            columns,
            loading: false,
            query: "",
            animation_frame: 0,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Show the spinner instead of cards
    pub fn loading(mut self, loading: bool, animation_frame: u8) -> Self {
        self.loading = loading;
        self.animation_frame = animation_frame;
        self
    }

    /// Active search query, used for the no-match message
    pub fn query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    fn render_message(&self, line: Line<'_>, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let y = area.y + area.height.saturating_sub(1) / 2;
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

impl Widget for AvatarGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;

        if self.loading {
            let frame = SPINNER[usize::from(self.animation_frame) % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(frame, styles::accent_bold(p)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, styles::text_secondary(p)),
            ]);
            self.render_message(line, area, buf);
            return;
        }

        if self.avatars.is_empty() {
            let text = if self.query.trim().is_empty() {
                "No avatars yet. Press n to create one.".to_string()
            } else {
                format!("No avatars match '{}'", self.query)
            };
            self.render_message(Line::styled(text, styles::text_muted(p)), area, buf);
            return;
        }

        for (index, rect) in
            layout::card_rects(area, self.columns, self.avatars.len(), self.selected)
        {
            AvatarCard::new(self.avatars[index], self.theme)
                .selected(index == self.selected)
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_theme, TestTerminal};
    use avatarhub_core::seed_avatars;

    #[test]
    fn test_loading_shows_spinner_text_and_no_cards() {
        let avatars = seed_avatars();
        let refs: Vec<&Avatar> = avatars.iter().collect();
        let mut term = TestTerminal::with_size(90, 20);
        let grid = AvatarGrid::new(&refs, 3, test_theme(false)).loading(true, 0);
        term.render_widget(grid, term.area());

        assert!(term.buffer_contains(LOADING_TEXT));
        assert!(term.buffer_contains("⠋"));
        assert!(!term.buffer_contains("Rahul"));
    }

    #[test]
    fn test_spinner_advances_with_frame() {
        let mut term = TestTerminal::with_size(40, 3);
        let grid = AvatarGrid::new(&[], 1, test_theme(false)).loading(true, 1);
        term.render_widget(grid, term.area());
        assert!(term.buffer_contains("⠙"));
    }

    #[test]
    fn test_renders_cards_in_order() {
        let avatars = seed_avatars();
        let refs: Vec<&Avatar> = avatars.iter().collect();
        let mut term = TestTerminal::with_size(120, 20);
        term.render_widget(AvatarGrid::new(&refs, 3, test_theme(false)), term.area());

        let row = term.content().lines().nth(1).unwrap_or_default().to_string();
        let men = row.find("Men Fashion").expect("first card");
        let kids = row.find("Kids Fashion").expect("second card");
        let women = row.find("Women Fashion").expect("third card");
        assert!(men < kids && kids < women);
    }

    #[test]
    fn test_no_match_message() {
        let mut term = TestTerminal::with_size(60, 5);
        let grid = AvatarGrid::new(&[], 2, test_theme(false)).query("zebra");
        term.render_widget(grid, term.area());
        assert!(term.buffer_contains("No avatars match 'zebra'"));
    }

    #[test]
    fn test_empty_without_query() {
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(AvatarGrid::new(&[], 2, test_theme(false)), term.area());
        assert!(term.buffer_contains("No avatars yet"));
    }
}
