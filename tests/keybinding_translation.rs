use calctui::{
    core::state::AppState, domain::operation::Operation, infrastructure::config::Config, Cmd,
    RawMsg, Runtime,
};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn runtime() -> Result<Runtime> {
    let config = Config::embedded_default()?;
    Ok(Runtime::new(AppState::new_with_config(config)))
}

fn press(runtime: &mut Runtime, code: KeyCode) -> Vec<Cmd> {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    runtime.process_all_messages()
}

#[test]
fn test_navigate_and_press_focused_buttons() -> Result<()> {
    let mut runtime = runtime()?;

    // 7 -> 4 -> 5
    press(&mut runtime, KeyCode::Down);
    press(&mut runtime, KeyCode::Right);
    press(&mut runtime, KeyCode::Enter);
    // 5 -> 6
    press(&mut runtime, KeyCode::Char('l'));
    press(&mut runtime, KeyCode::Char(' '));

    assert_eq!(runtime.state().display(), "56");
    assert_eq!(runtime.state().ui.focused, 6);
    Ok(())
}

#[test]
fn test_bound_press_moves_focus_to_the_button() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, KeyCode::Char('9'));

    press(&mut runtime, KeyCode::Esc);

    assert_eq!(runtime.state().display(), "");
    assert_eq!(
        runtime.state().ui.focused_button().map(|b| b.caption),
        Some("C")
    );
    Ok(())
}

#[test]
fn test_x_is_multiply() -> Result<()> {
    let mut runtime = runtime()?;
    press(&mut runtime, KeyCode::Char('6'));

    press(&mut runtime, KeyCode::Char('x'));

    assert_eq!(runtime.state().calculator.operator, Some(Operation::Multiply));
    assert_eq!(runtime.state().calculator.active_index, 1);
    Ok(())
}

#[test]
fn test_typed_expression_issues_one_calculation() -> Result<()> {
    let mut runtime = runtime()?;
    let mut commands = Vec::new();
    for c in "12/4=".chars() {
        commands.extend(press(&mut runtime, KeyCode::Char(c)));
    }

    assert_eq!(
        commands
            .iter()
            .filter(|cmd| matches!(cmd, Cmd::Calculate(_)))
            .count(),
        1
    );
    assert_eq!(runtime.state().display(), "4");
    Ok(())
}

#[rstest]
#[case(KeyCode::Char('q'), KeyModifiers::NONE)]
#[case(KeyCode::Char('c'), KeyModifiers::CONTROL)]
fn test_quit_keys(#[case] code: KeyCode, #[case] modifiers: KeyModifiers) -> Result<()> {
    let mut runtime = runtime()?;

    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, modifiers)));
    runtime.process_all_messages();

    assert!(runtime.state().system.should_quit);
    Ok(())
}

#[test]
fn test_alt_modified_digit_is_ignored() -> Result<()> {
    let mut runtime = runtime()?;

    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
        KeyCode::Char('5'),
        KeyModifiers::ALT,
    )));
    runtime.process_all_messages();

    assert_eq!(runtime.state().display(), "");
    Ok(())
}
