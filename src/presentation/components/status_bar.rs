//! Status bar component
//!
//! Displays the status line at the bottom of the screen.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::status_bar::{StatusBarWidget, ViewContext},
};

/// Status bar component
///
/// Shows the latest status message (errors included), a calculating indicator
/// while requests are pending, and the configured service address.
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let ctx = ViewContext {
            message: state.system.status_message().map(String::as_str),
            pending_requests: state.calculator.in_flight,
            service_url: &state.config.config.service_url,
        };
        let style = state.config.config.styles.style("status");
        frame.render_widget(StatusBarWidget::new(ctx, style), area);
    }
}
