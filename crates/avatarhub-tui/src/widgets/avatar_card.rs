//! Avatar card widget

use avatarhub_core::Avatar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

pub const TAGS: [&str; 2] = ["Influencer", "New"];

/// Read-only rendering of one avatar
pub struct AvatarCard<'a> {
    avatar: &'a Avatar,
    selected: bool,
    theme: Theme,
}

impl<'a> AvatarCard<'a> {
    pub fn new(avatar: &'a Avatar, theme: Theme) -> Self {
        Self {
            avatar,
            selected: false,
            theme,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for AvatarCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let icons = self.theme.icons;
        let block = styles::glass_block(p, self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let active = self.avatar.is_active();
        let status = Style::default().fg(styles::status_color(p, active));

        let name_line = Line::from(vec![
            Span::styled(icons.avatar(), styles::accent_bold(p)),
            Span::styled(icons.dot(), status),
            Span::raw(" "),
            Span::styled(self.avatar.name.as_str(), styles::text_bold(p)),
        ]);

        let description = Line::from(Span::styled(
            self.avatar.description.as_str(),
            styles::text_secondary(p),
        ));

        let tags = Line::from(vec![
            Span::styled(format!("[{}]", TAGS[0]), Style::default().fg(p.blue)),
            Span::raw(" "),
            Span::styled(format!("[{}]", TAGS[1]), Style::default().fg(p.purple)),
        ]);

        let image = Line::from(Span::styled(
            self.avatar.image_or_placeholder(),
            styles::text_muted(p).add_modifier(Modifier::ITALIC),
        ));

        let status_line = Line::from(vec![
            Span::styled(icons.dot(), status),
            Span::raw(" "),
            Span::styled(self.avatar.status.label(), status),
        ]);

        let lines = [name_line, description, tags, image, status_line];
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                return;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }

        // View/edit affordances, right-aligned on the status row
        let actions = Line::from(vec![
            Span::styled(icons.view(), styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(icons.edit(), styles::text_muted(p)),
        ]);
        let actions_width = actions.width() as u16;
        let status_width = lines[4].width() as u16;
        let y = inner.y + 4;
        if inner.width > status_width + actions_width + 1 {
            buf.set_line(inner.right() - actions_width, y, &actions, actions_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CARD_HEIGHT;
    use crate::test_utils::{test_theme, TestTerminal};
    use crate::theme::palette::LIGHT;
    use avatarhub_core::{AvatarStatus, PLACEHOLDER_IMAGE};

    fn render(avatar: &Avatar, selected: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(40, CARD_HEIGHT);
        let card = AvatarCard::new(avatar, test_theme(false)).selected(selected);
        term.render_widget(card, term.area());
        term
    }

    #[test]
    fn test_card_shows_all_parts() {
        let avatar = Avatar::new(1, "Men Fashion Influencer", "Rahul", AvatarStatus::Active)
            .with_image("/men.png");
        let term = render(&avatar, false);

        assert!(term.buffer_contains("Men Fashion Influencer"));
        assert!(term.buffer_contains("Rahul"));
        assert!(term.buffer_contains("[Influencer] [New]"));
        assert!(term.buffer_contains("/men.png"));
        assert!(term.buffer_contains("Active"));
        assert!(term.buffer_contains("[…] [✎]"));
    }

    #[test]
    fn test_active_status_is_green() {
        let avatar = Avatar::new(1, "A", "a", AvatarStatus::Active);
        let term = render(&avatar, false);
        // Status dot follows the avatar glyph
        assert_eq!(term.buffer()[(2, 1)].fg, LIGHT.green);
    }

    #[test]
    fn test_inactive_status_is_gray() {
        let avatar = Avatar::new(2, "B", "b", AvatarStatus::Inactive);
        let term = render(&avatar, false);

        assert!(term.buffer_contains("Inactive"));
        assert_eq!(term.buffer()[(2, 1)].fg, LIGHT.gray);
    }

    #[test]
    fn test_missing_image_shows_placeholder() {
        let avatar = Avatar::new(3, "C", "c", AvatarStatus::Active);
        let term = render(&avatar, false);
        assert!(term.buffer_contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_selected_card_border_highlighted() {
        let avatar = Avatar::new(1, "A", "a", AvatarStatus::Active);
        let term = render(&avatar, true);
        assert_eq!(term.buffer()[(0, 0)].fg, LIGHT.border_focus);

        let term = render(&avatar, false);
        assert_eq!(term.buffer()[(0, 0)].fg, LIGHT.border);
    }
}
