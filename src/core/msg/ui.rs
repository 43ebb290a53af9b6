use serde::{Deserialize, Serialize};

use crate::domain::keypad::FocusDirection;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    MoveFocus(FocusDirection),
    FocusButton(usize),
}
