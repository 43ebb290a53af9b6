use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Style as written in the config file
#[derive(Clone, Debug, Default, Deserialize)]
struct StyleSpec {
    #[serde(default)]
    fg: Option<Color>,
    #[serde(default)]
    bg: Option<Color>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    reversed: bool,
}

impl From<StyleSpec> for Style {
    fn from(raw: StyleSpec) -> Self {
        let mut style = Style::default();
        if let Some(fg) = raw.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = raw.bg {
            style = style.bg(bg);
        }
        if raw.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if raw.reversed {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

/// Named styles for the display, keypad and status line
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    pub fn style(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, StyleSpec>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, Style::from(raw)))
            .collect();

        Ok(Styles(styles))
    }
}
