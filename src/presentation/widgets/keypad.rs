use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    domain::keypad::{Button, ButtonGrid, ButtonInput},
    presentation::config::Styles,
};

/// Keypad grid. Rows share the height evenly; the single button of the last
/// row spans the full width.
pub struct KeypadWidget<'a> {
    focused: usize,
    styles: &'a Styles,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(focused: usize, styles: &'a Styles) -> Self {
        Self { focused, styles }
    }

    fn button_style(&self, button: &Button, index: usize) -> Style {
        let base = match button.input {
            ButtonInput::Equal => self.styles.style("equal"),
            ButtonInput::Operator(_) => self.styles.style("operator"),
            _ => self.styles.style("button"),
        };
        if index == self.focused {
            base.patch(self.styles.style("focused"))
        } else {
            base
        }
    }

    fn render_button(&self, button: &Button, index: usize, area: Rect, buf: &mut Buffer) {
        let style = self.button_style(button, index);
        let caption_area = if area.height >= 3 {
            let block = Block::default().borders(Borders::ALL).style(style);
            let inner = block.inner(area);
            block.render(area, buf);
            Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            }
        } else {
            buf.set_style(area, style);
            Rect { height: 1, ..area }
        };
        Paragraph::new(button.caption)
            .style(style)
            .alignment(Alignment::Center)
            .render(caption_area, buf);
    }
}

impl<'a> Widget for KeypadWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let grid = ButtonGrid;
        let row_count = grid.row_count() as u32;
        let rows = Layout::vertical(vec![Constraint::Ratio(1, row_count); grid.row_count()])
            .split(area);

        let mut index = 0;
        for (row, row_area) in grid.rows().zip(rows.iter()) {
            let cols = Layout::horizontal(vec![
                Constraint::Ratio(1, row.len() as u32);
                row.len()
            ])
            .split(*row_area);
            for (button, cell) in row.iter().zip(cols.iter()) {
                if cell.height > 0 && cell.width > 0 {
                    self.render_button(button, index, *cell, buf);
                }
                index += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(focused: usize, styles: &Styles, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(focused, styles).render(area, &mut buf);
        buf
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_compact_layout_has_one_line_per_row() {
        let styles = Styles::default();
        let buf = render(0, &styles, Rect::new(0, 0, 8, 5));

        assert_eq!(line(&buf, 0), "7 8 9 / ");
        assert_eq!(line(&buf, 1), "4 5 6 * ");
        assert_eq!(line(&buf, 2), "1 2 3 - ");
        assert_eq!(line(&buf, 3), "0 . C + ");
        assert_eq!(line(&buf, 4), "   =    ");
    }

    #[test]
    fn test_bordered_buttons_center_caption() {
        let styles = Styles::default();
        let buf = render(0, &styles, Rect::new(0, 0, 20, 15));

        assert_eq!(line(&buf, 0), "┌───┐┌───┐┌───┐┌───┐");
        assert_eq!(line(&buf, 1), "│ 7 ││ 8 ││ 9 ││ / │");
        assert_eq!(line(&buf, 13), "│        =         │");
    }

    #[test]
    fn test_focused_button_uses_focus_style() {
        let mut styles = Styles::default();
        styles.insert(
            "focused".to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        );
        let buf = render(5, &styles, Rect::new(0, 0, 8, 5));

        // "5" is the second button of the second row
        assert!(buf[(2, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 1)].modifier.contains(Modifier::REVERSED));
    }
}
