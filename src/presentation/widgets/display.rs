use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::text::tail_to_width;

/// Calculator display: one right-aligned line inside a bordered box.
/// Text wider than the box is cut from the left so the last digits stay visible.
pub struct DisplayWidget<'a> {
    text: &'a str,
    error: Option<String>,
    style: Style,
    error_style: Style,
}

impl<'a> DisplayWidget<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            error: None,
            style: Style::default(),
            error_style: Style::default(),
        }
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }
}

impl<'a> Widget for DisplayWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let line = match &self.error {
            Some(error) => Line::styled(tail_to_width(error, width).to_string(), self.error_style),
            None => Line::styled(tail_to_width(self.text, width).to_string(), self.style),
        };
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
