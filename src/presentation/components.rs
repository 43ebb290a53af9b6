//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod calculator;
pub mod status_bar;

pub use calculator::CalculatorComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
pub struct Components {
    pub calculator: CalculatorComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            calculator: CalculatorComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Calculator
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.calculator.view(state, frame, layout[0]);
        self.status_bar.view(state, frame, layout[1]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
