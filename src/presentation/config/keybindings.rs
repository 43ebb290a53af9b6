use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};

/// Actions a key can be bound to from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    PressFocused,
    /// Press the keypad button with this caption
    Press(String),
}

/// Flat key → action mapping
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Look up a key press, ignoring event kind and state
    pub fn action_for(&self, key: &KeyEvent) -> Option<&Action> {
        self.0.get(&KeyEvent::new(key.code, key.modifiers))
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse a key in `<ctrl-c>`, `<enter>` or `<q>` notation
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`: expected `<key>`"))?;
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`: empty key"));
    }

    let lowered = inner.to_ascii_lowercase();
    let (modifiers, rest) = extract_modifiers(&lowered);
    // keep the original case of a single character key (`<C>` vs `<c>`)
    let key = if rest.chars().count() == 1 {
        &inner[inner.len() - rest.len()..]
    } else {
        rest
    };
    parse_key_code_with_modifiers(key, modifiers).map_err(|e| format!("Unable to parse `{raw}`: {e}"))
}

fn extract_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (modifiers, current)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut chars = c.chars();
            let Some(mut ch) = chars.next() else {
                return Err("empty key".to_string());
            };
            if modifiers.contains(KeyModifiers::SHIFT) {
                ch = ch.to_ascii_uppercase();
            }
            KeyCode::Char(ch)
        }
        other => return Err(format!("unknown key `{other}`")),
    };
    if matches!(code, KeyCode::Char(c) if c.is_ascii_uppercase()) {
        modifiers.insert(KeyModifiers::SHIFT);
    }
    Ok(KeyEvent::new(code, modifiers))
}
