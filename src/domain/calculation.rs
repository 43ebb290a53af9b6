use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::operation::Operation;

/// A single request to the arithmetic service: `lhs <operation> rhs`.
/// Operands are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: String,
    pub rhs: String,
}

impl Calculation {
    pub fn new(operation: Operation, lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self {
            operation,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }
}

/// Why a calculation did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    #[error("invalid service address: {0}")]
    InvalidAddress(String),
    #[error("service unreachable: {0}")]
    Transport(String),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("response has no result")]
    MissingResult,
}

/// Result of a calculation as delivered back to the state machine
pub type CalcOutcome = Result<String, CalcError>;
