//! Evaluation results.

use serde::Serialize;
use std::fmt;

/// A successful evaluation result.
///
/// Factorial is the only operation with a non-negative domain, so it is
/// the only one producing `Unsigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
}

impl Value {
    /// Returns `true` if this is the unsigned (factorial) variant.
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Value::Unsigned(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Signed(v) => write!(f, "{v}"),
            Value::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_bare_number() {
        assert_eq!(Value::Signed(-42).to_string(), "-42");
        assert_eq!(Value::Unsigned(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn only_unsigned_variant_reports_unsigned() {
        assert!(Value::Unsigned(120).is_unsigned());
        assert!(!Value::Signed(5).is_unsigned());
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Value::Signed(-7)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&Value::Unsigned(7)).unwrap(), "7");
    }
}
