use serde::{Deserialize, Serialize};

use crate::domain::operation::Operation;

/// Input event a keypad button dispatches to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonInput {
    Digit(char),
    Operator(Operation),
    Decimal,
    Equal,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub caption: &'static str,
    pub input: ButtonInput,
}

impl Button {
    const fn digit(caption: &'static str, digit: char) -> Self {
        Self {
            caption,
            input: ButtonInput::Digit(digit),
        }
    }

    const fn operator(operation: Operation, caption: &'static str) -> Self {
        Self {
            caption,
            input: ButtonInput::Operator(operation),
        }
    }

    const fn new(caption: &'static str, input: ButtonInput) -> Self {
        Self { caption, input }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.input, ButtonInput::Operator(_))
    }
}

/// Direction for moving keypad focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Button table in display order, four per row.
/// The trailing `=` sits alone on the last row.
pub const BUTTONS: [Button; 17] = [
    Button::digit("7", '7'),
    Button::digit("8", '8'),
    Button::digit("9", '9'),
    Button::operator(Operation::Divide, "/"),
    Button::digit("4", '4'),
    Button::digit("5", '5'),
    Button::digit("6", '6'),
    Button::operator(Operation::Multiply, "*"),
    Button::digit("1", '1'),
    Button::digit("2", '2'),
    Button::digit("3", '3'),
    Button::operator(Operation::Subtract, "-"),
    Button::digit("0", '0'),
    Button::new(".", ButtonInput::Decimal),
    Button::new("C", ButtonInput::Clear),
    Button::operator(Operation::Add, "+"),
    Button::new("=", ButtonInput::Equal),
];

/// Static keypad layout with caption lookup and focus navigation
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonGrid;

impl ButtonGrid {
    pub const COLUMNS: usize = 4;

    pub fn buttons(&self) -> &'static [Button] {
        &BUTTONS
    }

    pub fn len(&self) -> usize {
        BUTTONS.len()
    }

    pub fn is_empty(&self) -> bool {
        BUTTONS.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Button> {
        BUTTONS.get(index)
    }

    /// Index of the button with the given caption
    pub fn position(&self, caption: &str) -> Option<usize> {
        BUTTONS.iter().position(|button| button.caption == caption)
    }

    /// Case-insensitive lookup for a typed character (`c` presses `C`)
    pub fn position_for_char(&self, c: char) -> Option<usize> {
        BUTTONS.iter().position(|button| {
            let mut chars = button.caption.chars();
            matches!((chars.next(), chars.next()), (Some(first), None) if first.eq_ignore_ascii_case(&c))
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &'static [Button]> {
        BUTTONS.chunks(Self::COLUMNS)
    }

    pub fn row_count(&self) -> usize {
        BUTTONS.len().div_ceil(Self::COLUMNS)
    }

    /// Index of the button reached by moving focus from `index`.
    /// Movement stops at the edges; moving down into a short last row lands
    /// on its final button, which spans the remaining width.
    pub fn neighbor(&self, index: usize, direction: FocusDirection) -> usize {
        let len = self.len();
        if index >= len {
            return len.saturating_sub(1);
        }
        let row = index / Self::COLUMNS;
        let col = index % Self::COLUMNS;

        match direction {
            FocusDirection::Left if col > 0 => index - 1,
            FocusDirection::Right if col + 1 < Self::COLUMNS && index + 1 < len => index + 1,
            FocusDirection::Up if row > 0 => index - Self::COLUMNS,
            FocusDirection::Down if row + 1 < self.row_count() => {
                (index + Self::COLUMNS).min(len - 1)
            }
            _ => index,
        }
    }
}
