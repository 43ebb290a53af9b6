use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::{calculator::CalculatorMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::keypad::{ButtonGrid, FocusDirection},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],

        // User input - translate based on key bindings and keypad captions
        RawMsg::Key(key) => translate_key_event(key, state),

        // Arithmetic service replies
        RawMsg::CalculationFinished {
            calculation,
            outcome,
        } => vec![Msg::Calculator(CalculatorMsg::ResultReceived {
            calculation,
            outcome,
        })],

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Terminal housekeeping is handled by the runner
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(..) => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if let Some(action) = state.config.config.keybindings.action_for(&key) {
        return translate_action_to_msg(action, state);
    }

    // Plain characters press the button with the same caption
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return vec![];
    }
    match key.code {
        KeyCode::Char(c) => ButtonGrid
            .position_for_char(c)
            .map(press_button)
            .unwrap_or_default(),
        _ => vec![],
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusUp => vec![Msg::Ui(UiMsg::MoveFocus(FocusDirection::Up))],
        Action::FocusDown => vec![Msg::Ui(UiMsg::MoveFocus(FocusDirection::Down))],
        Action::FocusLeft => vec![Msg::Ui(UiMsg::MoveFocus(FocusDirection::Left))],
        Action::FocusRight => vec![Msg::Ui(UiMsg::MoveFocus(FocusDirection::Right))],
        Action::PressFocused => press_button(state.ui.focused),
        Action::Press(caption) => match ButtonGrid.position(caption) {
            Some(index) => press_button(index),
            None => {
                log::warn!("Keybinding refers to unknown button `{caption}`");
                vec![]
            }
        },
    }
}

/// Focus the button and dispatch its input
fn press_button(index: usize) -> Vec<Msg> {
    match ButtonGrid.get(index) {
        Some(button) => vec![
            Msg::Ui(UiMsg::FocusButton(index)),
            Msg::Calculator(CalculatorMsg::from(button.input)),
        ],
        None => vec![],
    }
}
