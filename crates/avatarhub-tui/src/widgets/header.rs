//! Header bar widgets
//!
//! Branding, navigation, user badge and the theme/menu toggles. In the
//! narrow layout the navigation moves into [`MobileMenu`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::layout;
use crate::theme::{styles, Theme};

pub const NAV_ITEMS: [&str; 3] = ["Dashboard", "Settings", "Notifications"];
/// Unread count shown on the Notifications entry
pub const NOTIFICATION_BADGE: &str = "3";

/// Branding, plus navigation and notifications when wide.
///
/// [`layout::header`] places the toggles after this line, so its width
/// decides whether they fit.
pub fn header_branding(theme: Theme, narrow: bool) -> Line<'static> {
    let p = theme.palette;
    let mut left = vec![
        Span::styled(" AI ", styles::badge(p)),
        Span::raw(" "),
        Span::styled("AvatarHub", styles::accent_bold(p)),
    ];

    if !narrow {
        left.push(Span::raw("   "));
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            if i > 0 {
                left.push(Span::raw("  "));
            }
            let style = if i == 0 {
                styles::text_bold(p)
            } else {
                styles::text_secondary(p)
            };
            left.push(Span::styled(*item, style));
        }
        left.push(Span::raw(" "));
        left.push(Span::styled(
            format!("{}{}", theme.icons.bell(), NOTIFICATION_BADGE),
            styles::error(p),
        ));
    }

    Line::from(left)
}

/// Top bar of the dashboard
pub struct DashboardHeader<'a> {
    username: &'a str,
    badge_image: &'a str,
    dark_mode: bool,
    narrow: bool,
    menu_open: bool,
    theme: Theme,
}

impl<'a> DashboardHeader<'a> {
    pub fn new(username: &'a str, theme: Theme) -> Self {
        Self {
            username,
            badge_image: "",
            dark_mode: false,
            narrow: false,
            menu_open: false,
            theme,
        }
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Image reference shown after the username
    pub fn badge_image(mut self, badge_image: &'a str) -> Self {
        self.badge_image = badge_image;
        self
    }

    /// Use the narrow layout; `menu_open` picks the toggle glyph
    pub fn narrow(mut self, narrow: bool, menu_open: bool) -> Self {
        self.narrow = narrow;
        self.menu_open = menu_open;
        self
    }
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let block = styles::glass_block(p, false);
        block.render(area, buf);

        let left_line = header_branding(self.theme, self.narrow);
        let left_width = left_line.width() as u16;
        let areas = layout::header(area, self.narrow, left_width);
        let row = areas.inner;
        if row.height == 0 || row.width == 0 {
            return;
        }
        buf.set_line(row.x, row.y, &left_line, row.width);

        // Theme toggle, right-aligned
        if let Some(theme_rect) = areas.theme_toggle {
            let (icon, label) = if self.dark_mode {
                (self.theme.icons.dark(), "Dark ")
            } else {
                (self.theme.icons.light(), "Light")
            };
            let toggle = Line::from(vec![
                Span::styled("[", styles::text_muted(p)),
                Span::styled(format!("{} {}", icon, label), styles::keybinding(p)),
                Span::styled("]", styles::text_muted(p)),
            ]);
            buf.set_line(theme_rect.x, theme_rect.y, &toggle, theme_rect.width);
        }

        if self.narrow {
            if let Some(menu_rect) = areas.menu_toggle {
                let glyph = if self.menu_open {
                    self.theme.icons.menu_open()
                } else {
                    self.theme.icons.menu_closed()
                };
                let menu = Line::from(vec![
                    Span::styled("[", styles::text_muted(p)),
                    Span::styled(glyph, styles::accent_bold(p)),
                    Span::styled("]", styles::text_muted(p)),
                ]);
                buf.set_line(menu_rect.x, menu_rect.y, &menu, menu_rect.width);
            }
            return;
        }

        // Wide: user badge left of the theme toggle
        let badge = user_badge(self.username, self.badge_image, self.theme);
        let badge_width = badge.width() as u16;
        let right = areas.theme_toggle.map_or(row.right(), |r| r.x);
        let badge_x = right.saturating_sub(badge_width + 2);
        if badge_x >= row.x + left_width + 1 {
            buf.set_line(badge_x, row.y, &badge, badge_width);
        }
    }
}

fn user_badge<'a>(username: &'a str, badge_image: &'a str, theme: Theme) -> Line<'a> {
    let p = theme.palette;
    let mut spans = vec![
        Span::styled(theme.icons.avatar(), styles::accent_bold(p)),
        Span::raw(" "),
        Span::styled(username, styles::text(p)),
    ];
    if !badge_image.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badge_image, styles::text_muted(p)));
    }
    Line::from(spans)
}

/// Stacked navigation under the header (narrow layout, menu open)
pub struct MobileMenu<'a> {
    username: &'a str,
    badge_image: &'a str,
    theme: Theme,
}

impl<'a> MobileMenu<'a> {
    pub fn new(username: &'a str, theme: Theme) -> Self {
        Self {
            username,
            badge_image: "",
            theme,
        }
    }

    pub fn badge_image(mut self, badge_image: &'a str) -> Self {
        self.badge_image = badge_image;
        self
    }
}

impl Widget for MobileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let block = styles::glass_block(p, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = NAV_ITEMS
            .iter()
            .map(|item| Line::from(Span::styled(format!(" {}", item), styles::text(p))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::raw(" "));
            last.push_span(Span::styled(NOTIFICATION_BADGE, styles::error(p)));
        }
        let mut user = vec![
            Span::raw(" "),
            Span::styled(self.theme.icons.avatar(), styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled(self.username, Style::default().fg(p.text_secondary)),
        ];
        if !self.badge_image.is_empty() {
            user.push(Span::raw(" "));
            user.push(Span::styled(self.badge_image, styles::text_muted(p)));
        }
        lines.push(Line::from(user));

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}
