//! Calculator component
//!
//! Renders the display above the keypad. Stateless: everything it draws comes
//! from AppState.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::{DisplayWidget, KeypadWidget},
};

/// Height of the bordered display box
const DISPLAY_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct CalculatorComponent;

impl CalculatorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
            .split(area);
        let styles = &state.config.config.styles;

        let display = DisplayWidget::new(state.display())
            .error(state.calculator.error.as_ref().map(ToString::to_string))
            .style(styles.style("display"))
            .error_style(styles.style("error"));
        frame.render_widget(display, layout[0]);

        frame.render_widget(KeypadWidget::new(state.ui.focused, styles), layout[1]);
    }
}
