use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext<'a> {
    pub message: Option<&'a str>,
    pub pending_requests: usize,
    pub service_url: &'a str,
}

/// Single status line: message on the left, service address on the right
pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>, style: Style) -> Self {
        Self { ctx, style }
    }

    pub fn message(&self) -> String {
        match (self.ctx.message, self.ctx.pending_requests) {
            (Some(message), _) => message.to_string(),
            (None, 0) => String::new(),
            (None, 1) => "Calculating...".to_string(),
            (None, n) => format!("Calculating... ({n} pending)"),
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let url_width = self.ctx.service_url.width() as u16;
        let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(url_width)])
            .split(area);

        Paragraph::new(self.message())
            .style(self.style)
            .render(layout[0], buf);
        Paragraph::new(self.ctx.service_url)
            .style(self.style)
            .alignment(Alignment::Right)
            .render(layout[1], buf);
    }
}
