use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Arithmetic operation understood by the remote service.
///
/// The lowercase name doubles as the first path segment of a calculation
/// request (`/add/1/2`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Path segment used when calling the arithmetic service
    pub fn path_name(&self) -> &str {
        self.as_ref()
    }

    /// Sign character an operation stands for when pressed on an empty operand.
    /// Only add and subtract can act as unary signs.
    pub fn sign(&self) -> Option<char> {
        match self {
            Operation::Add => Some('+'),
            Operation::Subtract => Some('-'),
            Operation::Multiply | Operation::Divide => None,
        }
    }

    /// Keypad caption
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_path_names() {
        let names: Vec<String> = Operation::iter().map(|op| op.to_string()).collect();
        assert_eq!(names, vec!["add", "subtract", "multiply", "divide"]);
        assert_eq!(Operation::Divide.path_name(), "divide");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for op in Operation::iter() {
            assert_eq!(Operation::from_str(op.path_name()).ok(), Some(op));
        }
        assert!(Operation::from_str("modulo").is_err());
    }

    #[test]
    fn test_sign() {
        assert_eq!(Operation::Add.sign(), Some('+'));
        assert_eq!(Operation::Subtract.sign(), Some('-'));
        assert_eq!(Operation::Multiply.sign(), None);
        assert_eq!(Operation::Divide.sign(), None);
    }

    #[test]
    fn test_serde_lowercase() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Operation::Multiply)?, "\"multiply\"");
        let op: Operation = serde_json::from_str("\"subtract\"")?;
        assert_eq!(op, Operation::Subtract);
        Ok(())
    }
}
