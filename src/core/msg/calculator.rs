use serde::{Deserialize, Serialize};

use crate::domain::{
    calculation::{CalcOutcome, Calculation},
    keypad::ButtonInput,
    operation::Operation,
};

/// Messages handled by CalculatorState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculatorMsg {
    // Keypad input
    Digit(char),
    Decimal,
    Operator(Operation),
    Equal,
    Clear,

    // Completion of a request issued by Equal
    ResultReceived {
        calculation: Calculation,
        outcome: CalcOutcome,
    },
}

impl CalculatorMsg {
    /// Whether this message originates from the keypad (as opposed to the service)
    pub fn is_input(&self) -> bool {
        !matches!(self, CalculatorMsg::ResultReceived { .. })
    }
}

impl From<ButtonInput> for CalculatorMsg {
    fn from(input: ButtonInput) -> Self {
        match input {
            ButtonInput::Digit(d) => CalculatorMsg::Digit(d),
            ButtonInput::Operator(op) => CalculatorMsg::Operator(op),
            ButtonInput::Decimal => CalculatorMsg::Decimal,
            ButtonInput::Equal => CalculatorMsg::Equal,
            ButtonInput::Clear => CalculatorMsg::Clear,
        }
    }
}
