//! Create-avatar modal
//!
//! Dimmed backdrop, centered panel with three text fields, a decorative
//! upload area and the Cancel / Create Avatar buttons.

use avatarhub_app::{CreateAvatarForm, FormField, FormFocus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::layout::{self, CANCEL_LABEL, CLOSE_LABEL, CREATE_LABEL};
use crate::theme::{styles, Theme};

use super::modal_overlay;

pub const MODAL_TITLE: &str = "Create New Avatar";
pub const UPLOAD_TEXT: &str = "Upload avatar image";
pub const UPLOAD_HINT: &str = "PNG, JPG up to 2MB";

pub struct CreateModal<'a> {
    form: &'a CreateAvatarForm,
    theme: Theme,
}

impl<'a> CreateModal<'a> {
    pub fn new(form: &'a CreateAvatarForm, theme: Theme) -> Self {
        Self { form, theme }
    }

    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let p = self.theme.palette;
        let focused = self.form.focus == FormFocus::from(field);

        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        buf.set_line(
            area.x,
            area.y,
            &Line::styled(field.label(), label_style),
            area.width,
        );

        let input_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        let block = styles::glass_block(p, focused);
        let inner = block.inner(input_area);
        block.render(input_area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let value = self.form.value(field);
        let line = if value.is_empty() && !focused {
            Line::styled(field.placeholder(), styles::text_muted(p))
        } else {
            // Keep the end of long values (and the cursor) visible
            let room = usize::from(inner.width.saturating_sub(1));
            let mut spans = vec![Span::styled(tail_fit(value, room), styles::text(p))];
            if focused {
                spans.push(Span::styled(
                    "_",
                    Style::default()
                        .fg(p.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }

    fn render_upload(&self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let lines = vec![
            Line::from(vec![
                Span::styled(self.theme.icons.upload(), styles::accent_bold(p)),
                Span::raw(" "),
                Span::styled(UPLOAD_TEXT, styles::text_secondary(p)),
            ]),
            Line::styled(UPLOAD_HINT, styles::text_muted(p)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_issues(&self, area: Rect, buf: &mut Buffer) {
        if self.form.is_untouched() {
            return;
        }
        let issues = self.form.validate();
        if issues.is_empty() {
            return;
        }
        let text = issues
            .iter()
            .map(|issue| issue.message())
            .collect::<Vec<_>>()
            .join(" · ");
        let hint = Style::default().fg(self.theme.palette.yellow);
        let line = Line::from(vec![
            Span::styled(self.theme.icons.alert(), hint),
            Span::raw(" "),
            Span::styled(text, hint),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for CreateModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let areas = layout::modal(area);

        modal_overlay::dim_background(buf, area, p);
        modal_overlay::render_shadow(buf, areas.panel, p);
        modal_overlay::clear_area(buf, areas.panel);
        styles::modal_block(p).render(areas.panel, buf);

        buf.set_line(
            areas.title.x,
            areas.title.y,
            &Line::styled(MODAL_TITLE, styles::text_bold(p)),
            areas.title.width,
        );
        buf.set_line(
            areas.close.x,
            areas.close.y,
            &Line::styled(CLOSE_LABEL, styles::text_muted(p)),
            areas.close.width,
        );

        for (field, rect) in areas.fields {
            self.render_field(field, rect, buf);
        }
        self.render_upload(areas.upload, buf);
        self.render_issues(areas.issues, buf);

        buf.set_line(
            areas.cancel.x,
            areas.cancel.y,
            &Line::styled(
                CANCEL_LABEL,
                styles::button(p, self.form.focus == FormFocus::Cancel),
            ),
            areas.cancel.width,
        );
        buf.set_line(
            areas.create.x,
            areas.create.y,
            &Line::styled(
                CREATE_LABEL,
                styles::button(p, self.form.focus == FormFocus::Create),
            ),
            areas.create.width,
        );
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
