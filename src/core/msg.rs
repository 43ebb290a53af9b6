use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod system;
pub mod ui;

use calculator::CalculatorMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent.
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Keypad and service completion (delegated to CalculatorState)
    Calculator(CalculatorMsg),

    // Focus handling (delegated to UiState)
    Ui(UiMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Calculator(CalculatorMsg::Clear),
            Msg::Calculator(CalculatorMsg::Clear)
        );
        assert_ne!(
            Msg::Calculator(CalculatorMsg::Clear),
            Msg::Calculator(CalculatorMsg::Equal)
        );
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::Calculator(CalculatorMsg::Digit('7'));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
