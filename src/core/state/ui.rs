use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::keypad::{Button, ButtonGrid},
};

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Keypad button that has keyboard focus
    pub focused: usize,
}

impl UiState {
    pub fn focused_button(&self) -> Option<&'static Button> {
        ButtonGrid.get(self.focused)
    }

    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::MoveFocus(direction) => {
                self.focused = ButtonGrid.neighbor(self.focused, direction);
            }
            UiMsg::FocusButton(index) => {
                if index < ButtonGrid.len() {
                    self.focused = index;
                }
            }
        }
        vec![]
    }
}
