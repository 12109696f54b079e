//! intcalc — overflow-checked integer calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod context;
pub mod env;
pub mod evaluator;
pub mod logging;
pub mod models;
pub mod output;

pub use context::{EvaluationContext, evaluate};
pub use models::{EvalError, OperationKind, OperationalStatus, Outcome, ValidationError, Value};
