//! Stat card widget

use avatarhub_app::stats::StatCard;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

/// One statistic: title, value and a colored icon. Pure function of the card.
pub struct StatsCard<'a> {
    card: &'a StatCard,
    theme: Theme,
}

impl<'a> StatsCard<'a> {
    pub fn new(card: &'a StatCard, theme: Theme) -> Self {
        Self { card, theme }
    }
}

impl Widget for StatsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let color = styles::stat_color(p, self.card.color);
        let icon = self.theme.icons.stat(self.card.icon);

        let title = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(self.card.title.as_str(), styles::text_secondary(p)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height > 1 {
            let value = Line::from(Span::styled(
                format!("   {}", self.card.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            buf.set_line(inner.x, inner.y + 1, &value, inner.width);
        }
    }
}
