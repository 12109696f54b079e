//! Outcome classification: error kinds and the status reported to users.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::value::Value;

/// A violated operand precondition, detected before any arithmetic runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing first operand")]
    MissingFirstOperand,

    #[error("operation requires a second operand")]
    MissingSecondOperand,

    #[error("exponent must be non-negative")]
    NegativeExponent,

    #[error("factorial is undefined for negative numbers")]
    NegativeFactorial,
}

/// Why an evaluation failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result exceeds the representable range")]
    Overflow,

    #[error("unsupported operation")]
    UnsupportedOperation,
}

impl EvalError {
    /// The status this error is reported as.
    pub fn status(&self) -> OperationalStatus {
        match self {
            EvalError::Validation(_) => OperationalStatus::ValidationError,
            EvalError::DivisionByZero => OperationalStatus::DivisionByZero,
            EvalError::Overflow => OperationalStatus::Overflow,
            EvalError::UnsupportedOperation => OperationalStatus::UnsupportedOperation,
        }
    }
}

/// Outcome classifier of an evaluation attempt.
///
/// `AllRight` is the only success value. Codes are stable and follow
/// declaration order.
///
/// There is no underflow status: a result outside the `i64`/`u64` range in
/// either direction is reported as `Overflow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalStatus {
    #[default]
    AllRight,
    ValidationError,
    DivisionByZero,
    Overflow,
    UnsupportedOperation,
}

impl OperationalStatus {
    /// Numeric code shown alongside error messages.
    pub fn code(self) -> u8 {
        match self {
            OperationalStatus::AllRight => 0,
            OperationalStatus::ValidationError => 1,
            OperationalStatus::DivisionByZero => 2,
            OperationalStatus::Overflow => 3,
            OperationalStatus::UnsupportedOperation => 4,
        }
    }
}

impl fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationalStatus::AllRight => write!(f, "all_right"),
            OperationalStatus::ValidationError => write!(f, "validation_error"),
            OperationalStatus::DivisionByZero => write!(f, "division_by_zero"),
            OperationalStatus::Overflow => write!(f, "overflow"),
            OperationalStatus::UnsupportedOperation => write!(f, "unsupported_operation"),
        }
    }
}

impl From<&Result<Value, EvalError>> for OperationalStatus {
    fn from(outcome: &Result<Value, EvalError>) -> Self {
        match outcome {
            Ok(_) => OperationalStatus::AllRight,
            Err(e) => e.status(),
        }
    }
}
