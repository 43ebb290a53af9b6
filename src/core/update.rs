use crate::core::{
    cmd::Cmd,
    msg::{calculator::CalculatorMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        // Calculator messages (delegated to CalculatorState).
        // The status line follows the calculator's error.
        Msg::Calculator(calculator_msg) => {
            let had_error = state.calculator.error.is_some();
            let is_result = matches!(calculator_msg, CalculatorMsg::ResultReceived { .. });
            let commands = state.calculator.update(calculator_msg);

            match &state.calculator.error {
                Some(error) => state.system.status_message = Some(format!("Error: {error}")),
                None if had_error || is_result => state.system.status_message = None,
                None => {}
            }

            (state, commands)
        }
    }
}
