//! Shared modal overlay utilities.
//!
//! Centering, backdrop dimming and the drop shadow for modal panels.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::Palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use avatarhub_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area`, keeping its symbol.
///
/// Terminal stand-in for a translucent backdrop behind the panel.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.backdrop);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().bg(palette.backdrop).fg(palette.backdrop);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)..=modal_rect.y.saturating_add(modal_rect.height) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)..=modal_rect.x.saturating_add(modal_rect.width) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset the cells of `area` before drawing the panel
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(60, 30, Rect::new(0, 0, 30, 10));
        assert_eq!(result, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_keeps_symbols() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "avatar", Style::default());

        dim_background(&mut buf, area, &LIGHT);

        assert_eq!(buf[(0, 0)].symbol(), "a");
        for y in 0..2 {
            for x in 0..6 {
                assert_eq!(buf[(x, y)].bg, LIGHT.backdrop);
                assert_eq!(buf[(x, y)].fg, LIGHT.text_muted);
            }
        }
    }

    #[test]
    fn test_render_shadow_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6), &DARK);

        assert_eq!(buf[(15, 3)].bg, DARK.backdrop);
        assert_eq!(buf[(6, 8)].bg, DARK.backdrop);
        assert_eq!(buf[(6, 8)].symbol(), " ");
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2), &DARK);
    }

    #[test]
    fn test_clear_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        buf.set_string(0, 2, "XXXXXXXXXX", Style::default());

        clear_area(&mut buf, Rect::new(2, 2, 5, 1));

        assert_eq!(buf[(1, 2)].symbol(), "X");
        assert_eq!(buf[(2, 2)].symbol(), " ");
        assert_eq!(buf[(7, 2)].symbol(), "X");
    }
}
