//! Footer bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

pub const COPYRIGHT: &str = "AvatarHub © 2025";
pub const FOOTER_LINKS: [&str; 4] = ["Help", "Privacy", "Terms", "Contact"];

/// Branding on the left, static links on the right
pub struct Footer {
    theme: Theme,
}

impl Footer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.theme.palette;

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(" AI ", styles::badge(p)),
            Span::raw(" "),
            Span::styled(COPYRIGHT, styles::text_muted(p)),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let mut spans = Vec::new();
        for (i, link) in FOOTER_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(p)));
            }
            spans.push(Span::styled(*link, styles::text_secondary(p)));
        }
        spans.push(Span::raw(" "));
        let right = Line::from(spans);

        // Links only when they fit beside the branding
        let right_width = right.width() as u16;
        if area.width > left.width() as u16 + right_width + 2 {
            buf.set_line(area.right() - right_width, area.y, &right, right_width);
        }
    }
}
