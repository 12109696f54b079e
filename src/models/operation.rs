//! The operation tag selecting which checked evaluator runs.

use serde::Serialize;
use std::fmt;

/// Arithmetic operation selector.
///
/// `None` is the unset sentinel: a context that still carries it is
/// rejected with `UnsupportedOperation` instead of being dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    #[default]
    None,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Fact,
}

impl OperationKind {
    /// All dispatchable operations, in declaration order.
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Sub,
        OperationKind::Mul,
        OperationKind::Div,
        OperationKind::Pow,
        OperationKind::Fact,
    ];

    /// Returns `true` for operations that never consult the second operand.
    pub fn is_unary(self) -> bool {
        matches!(self, OperationKind::Fact)
    }

    /// Infix/postfix symbol accepted as an alias on the command line.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            OperationKind::None => None,
            OperationKind::Add => Some("+"),
            OperationKind::Sub => Some("-"),
            OperationKind::Mul => Some("*"),
            OperationKind::Div => Some("/"),
            OperationKind::Pow => Some("^"),
            OperationKind::Fact => Some("!"),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::None => write!(f, "none"),
            OperationKind::Add => write!(f, "add"),
            OperationKind::Sub => write!(f, "sub"),
            OperationKind::Mul => write!(f, "mul"),
            OperationKind::Div => write!(f, "div"),
            OperationKind::Pow => write!(f, "pow"),
            OperationKind::Fact => write!(f, "fact"),
        }
    }
}

/// Resolves the command-line aliases (`add` / `+`, `fact` / `!`, ...).
///
/// `none` is deliberately not accepted: the sentinel is never something a
/// user can select.
impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OperationKind::ALL
            .into_iter()
            .find(|op| op.symbol() == Some(s) || op.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let supported: Vec<String> = OperationKind::ALL
                    .iter()
                    .map(|op| format!("{op}({})", op.symbol().unwrap_or_default()))
                    .collect();
                format!(
                    "unsupported operation: '{s}'. Supported: {}",
                    supported.join(", ")
                )
            })
    }
}
