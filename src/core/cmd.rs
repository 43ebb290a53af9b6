use serde::{Deserialize, Serialize};

use crate::domain::calculation::Calculation;

/// Elm-like command definitions
/// Represents side effects requested by the update function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Arithmetic service
    Calculate(Calculation),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::Calculate(_) => true,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => false,
        }
    }

    /// Human-readable name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Calculate(_) => "Calculate",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operation::Operation;

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::Calculate(Calculation::new(Operation::Add, "1", "2")).is_async());
        assert!(!Cmd::LogInfo {
            message: "test".to_string()
        }
        .is_async());
    }

    #[test]
    fn test_cmd_name() {
        assert_eq!(
            Cmd::LogError {
                message: "boom".into()
            }
            .name(),
            "LogError"
        );
    }

    #[test]
    fn test_cmd_serialization() -> color_eyre::Result<()> {
        let cmd = Cmd::Calculate(Calculation::new(Operation::Multiply, "-2", "3.5"));

        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
