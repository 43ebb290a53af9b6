use crate::{
    core::{cmd::Cmd, msg::calculator::CalculatorMsg},
    domain::{
        calculation::{CalcError, CalcOutcome, Calculation},
        numeric::is_numeric_literal,
        operation::Operation,
    },
};

/// Interaction state of the calculator: two operand slots being composed,
/// the slot under edit, the pending operator and the text on the display.
///
/// `display` mirrors `operands[active_index]`; after a result the operands
/// become `[result, ""]` with slot 0 active, so the mirror still holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorState {
    pub operands: [String; 2],
    pub active_index: usize,
    pub operator: Option<Operation>,
    pub display: String,
    /// Last failed calculation, shown until the next keypad input
    pub error: Option<CalcError>,
    /// Requests issued and not yet answered
    pub in_flight: usize,
}

impl CalculatorState {
    pub fn active_operand(&self) -> &str {
        &self.operands[self.active_index]
    }

    pub fn is_editing_second_operand(&self) -> bool {
        self.active_index == 1
    }

    pub fn is_calculating(&self) -> bool {
        self.in_flight > 0
    }

    /// Calculator-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CalculatorMsg) -> Vec<Cmd> {
        if msg.is_input() {
            self.error = None;
        }

        match msg {
            CalculatorMsg::Digit(d) => {
                if d.is_ascii_digit() {
                    self.append(d);
                }
                vec![]
            }

            CalculatorMsg::Decimal => {
                let candidate = format!("{}.", self.active_operand());
                if is_numeric_literal(&candidate) {
                    self.set_active_operand(candidate);
                }
                vec![]
            }

            CalculatorMsg::Operator(op) => self.press_operator(op),

            CalculatorMsg::Equal => self.equal(),

            CalculatorMsg::Clear => {
                // The pending operator survives a clear.
                self.operands = [String::new(), String::new()];
                self.active_index = 0;
                self.display.clear();
                vec![]
            }

            CalculatorMsg::ResultReceived {
                calculation,
                outcome,
            } => self.receive(calculation, outcome),
        }
    }

    fn press_operator(&mut self, op: Operation) -> Vec<Cmd> {
        if self.is_editing_second_operand() {
            return self.equal();
        }

        if self.active_operand().is_empty() {
            if let Some(sign) = op.sign() {
                self.append(sign);
                return vec![];
            }
        }

        self.operator = Some(op);
        self.active_index = 1 - self.active_index;
        self.display = self.active_operand().to_string();
        vec![]
    }

    fn equal(&mut self) -> Vec<Cmd> {
        if self.operands.iter().any(String::is_empty) {
            return vec![];
        }
        let Some(operation) = self.operator else {
            return vec![Cmd::LogInfo {
                message: "equals ignored: no pending operator".to_string(),
            }];
        };

        let calculation = Calculation::new(
            operation,
            self.operands[0].clone(),
            self.operands[1].clone(),
        );
        let mut cmds = Vec::with_capacity(2);
        if self.is_calculating() {
            cmds.push(Cmd::LogInfo {
                message: format!(
                    "{} request(s) still pending; the last response wins",
                    self.in_flight
                ),
            });
        }
        self.in_flight += 1;
        cmds.push(Cmd::Calculate(calculation));
        cmds
    }

    fn receive(&mut self, calculation: Calculation, outcome: CalcOutcome) -> Vec<Cmd> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(result) => {
                self.operands = [result.clone(), String::new()];
                self.active_index = 0;
                self.operator = None;
                self.display = result;
                self.error = None;
                vec![]
            }
            Err(error) => {
                let message = format!("{calculation} failed: {error}");
                self.error = Some(error);
                vec![Cmd::LogError { message }]
            }
        }
    }

    fn append(&mut self, c: char) {
        let mut operand = self.active_operand().to_string();
        operand.push(c);
        self.set_active_operand(operand);
    }

    fn set_active_operand(&mut self, operand: String) {
        self.display.clone_from(&operand);
        self.operands[self.active_index] = operand;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press_all(state: &mut CalculatorState, msgs: Vec<CalculatorMsg>) -> Vec<Cmd> {
        msgs.into_iter().flat_map(|msg| state.update(msg)).collect()
    }

    fn digits(s: &str) -> Vec<CalculatorMsg> {
        s.chars().map(CalculatorMsg::Digit).collect()
    }

    #[test]
    fn test_default_state() {
        let state = CalculatorState::default();
        assert_eq!(state.operands, [String::new(), String::new()]);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.operator, None);
        assert_eq!(state.display, "");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_digits_concatenate() {
        let mut state = CalculatorState::default();
        let cmds = press_all(&mut state, digits("1205"));
        assert!(cmds.is_empty());
        assert_eq!(state.display, "1205");
        assert_eq!(state.operands[0], "1205");
    }

    #[test]
    fn test_non_digit_char_is_ignored() {
        let mut state = CalculatorState::default();
        state.update(CalculatorMsg::Digit('x'));
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_second_decimal_point_is_rejected() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("3"));
        state.update(CalculatorMsg::Decimal);
        press_all(&mut state, digits("1"));
        let before = state.clone();
        state.update(CalculatorMsg::Decimal);
        assert_eq!(state, before);
        assert_eq!(state.display, "3.1");
    }

    #[test]
    fn test_decimal_on_empty_operand_is_rejected() {
        let mut state = CalculatorState::default();
        state.update(CalculatorMsg::Decimal);
        assert_eq!(state.operands[0], "");
    }

    #[test]
    fn test_leading_sign() {
        let mut state = CalculatorState::default();
        state.update(CalculatorMsg::Operator(Operation::Subtract));
        assert_eq!(state.operands[0], "-");
        assert_eq!(state.display, "-");
        assert_eq!(state.operator, None);
        assert_eq!(state.active_index, 0);

        // a decimal point right after a sign is not a number yet
        state.update(CalculatorMsg::Decimal);
        assert_eq!(state.operands[0], "-");
    }

    #[test]
    fn test_multiply_on_empty_operand_selects_operator() {
        let mut state = CalculatorState::default();
        state.update(CalculatorMsg::Operator(Operation::Multiply));
        assert_eq!(state.operator, Some(Operation::Multiply));
        assert_eq!(state.active_index, 1);
    }

    #[test]
    fn test_operator_advances_to_second_slot() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("12"));
        let cmds = state.update(CalculatorMsg::Operator(Operation::Divide));
        assert!(cmds.is_empty());
        assert_eq!(state.operator, Some(Operation::Divide));
        assert_eq!(state.active_index, 1);
        assert_eq!(state.display, "");
        assert_eq!(state.operands[0], "12");
    }

    #[test]
    fn test_sign_on_second_operand_is_chained_equal() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("5"));
        state.update(CalculatorMsg::Operator(Operation::Add));
        // second slot is active; a minus here behaves as equals (operands incomplete)
        let cmds = state.update(CalculatorMsg::Operator(Operation::Subtract));
        assert!(cmds.is_empty());
        assert_eq!(state.operands[1], "");
        assert_eq!(state.operator, Some(Operation::Add));
    }

    #[test]
    fn test_equal_issues_calculation() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("7"));
        state.update(CalculatorMsg::Operator(Operation::Add));
        press_all(&mut state, digits("3"));
        let cmds = state.update(CalculatorMsg::Equal);
        assert_eq!(
            cmds,
            vec![Cmd::Calculate(Calculation::new(Operation::Add, "7", "3"))]
        );
        assert_eq!(state.in_flight, 1);
        assert_eq!(state.display, "3");
    }

    #[test]
    fn test_equal_with_missing_operand_is_noop() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("7"));
        state.update(CalculatorMsg::Operator(Operation::Add));
        let before = state.clone();
        let cmds = state.update(CalculatorMsg::Equal);
        assert!(cmds.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_overlapping_requests_are_logged_not_blocked() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("7"));
        state.update(CalculatorMsg::Operator(Operation::Add));
        press_all(&mut state, digits("3"));
        state.update(CalculatorMsg::Equal);
        let cmds = state.update(CalculatorMsg::Equal);
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], Cmd::LogInfo { .. }));
        assert!(matches!(cmds[1], Cmd::Calculate(_)));
        assert_eq!(state.in_flight, 2);
    }

    #[test]
    fn test_result_installs_first_operand() {
        let mut state = CalculatorState {
            operands: ["7".into(), "3".into()],
            active_index: 1,
            operator: Some(Operation::Add),
            display: "3".into(),
            in_flight: 1,
            ..Default::default()
        };
        state.update(CalculatorMsg::ResultReceived {
            calculation: Calculation::new(Operation::Add, "7", "3"),
            outcome: Ok("10".into()),
        });
        assert_eq!(state.operands, ["10".to_string(), String::new()]);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.operator, None);
        assert_eq!(state.display, "10");
        assert_eq!(state.in_flight, 0);

        // typing continues the result
        state.update(CalculatorMsg::Digit('5'));
        assert_eq!(state.display, "105");
    }

    #[test]
    fn test_failure_keeps_operands_and_sets_error() {
        let mut state = CalculatorState {
            operands: ["7".into(), "3".into()],
            active_index: 1,
            operator: Some(Operation::Add),
            display: "3".into(),
            in_flight: 1,
            ..Default::default()
        };
        let cmds = state.update(CalculatorMsg::ResultReceived {
            calculation: Calculation::new(Operation::Add, "7", "3"),
            outcome: Err(CalcError::Status(500)),
        });
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
        assert_eq!(state.error, Some(CalcError::Status(500)));
        assert_eq!(state.operands, ["7".to_string(), "3".to_string()]);
        assert_eq!(state.operator, Some(Operation::Add));
        assert_eq!(state.in_flight, 0);

        // next input clears the error
        state.update(CalculatorMsg::Digit('1'));
        assert!(state.error.is_none());
        assert_eq!(state.display, "31");
    }

    #[test]
    fn test_clear_keeps_operator() {
        let mut state = CalculatorState::default();
        press_all(&mut state, digits("8"));
        state.update(CalculatorMsg::Operator(Operation::Multiply));
        press_all(&mut state, digits("2"));
        state.update(CalculatorMsg::Clear);
        assert_eq!(state.operands, [String::new(), String::new()]);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.display, "");
        assert_eq!(state.operator, Some(Operation::Multiply));
    }
}
