//! Evaluation context: operand validation, dispatch and result storage.
//!
//! A context is built once per invocation from already-parsed operands,
//! evaluated once, then read by the reporting layer. Validation runs in a
//! fixed order and the first violated precondition decides the status; no
//! arithmetic is attempted unless every check passes.

use tracing::{debug, trace};

use crate::evaluator;
use crate::models::{EvalError, OperationKind, OperationalStatus, Outcome, ValidationError, Value};

/// The unit of work for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    operation: OperationKind,
    first: Option<i64>,
    second: Option<i64>,
    /// `None` until [`evaluate`](Self::evaluate) runs; never overwritten after.
    outcome: Option<Outcome>,
}

impl EvaluationContext {
    pub fn new(operation: OperationKind, first: Option<i64>, second: Option<i64>) -> Self {
        Self {
            operation,
            first,
            second,
            outcome: None,
        }
    }

    /// Context for a two-operand operation.
    pub fn binary(operation: OperationKind, first: i64, second: i64) -> Self {
        Self::new(operation, Some(first), Some(second))
    }

    /// Context for a one-operand operation (factorial).
    pub fn unary(operation: OperationKind, first: i64) -> Self {
        Self::new(operation, Some(first), None)
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn first(&self) -> Option<i64> {
        self.first
    }

    pub fn second(&self) -> Option<i64> {
        self.second
    }

    /// Check operation-specific preconditions.
    ///
    /// Order matters: the operation tag is checked first, then operand
    /// presence, then per-operation domain rules.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.operation == OperationKind::None {
            return Err(EvalError::UnsupportedOperation);
        }

        let first = self.first.ok_or(ValidationError::MissingFirstOperand)?;

        if self.operation.is_unary() {
            if first < 0 {
                return Err(ValidationError::NegativeFactorial.into());
            }
            return Ok(());
        }

        let second = self.second.ok_or(ValidationError::MissingSecondOperand)?;
        match self.operation {
            OperationKind::Div if second == 0 => Err(EvalError::DivisionByZero),
            OperationKind::Pow if second < 0 => Err(ValidationError::NegativeExponent.into()),
            _ => Ok(()),
        }
    }

    /// Validate, dispatch and store the outcome.
    ///
    /// Returns `true` iff the status is `AllRight` afterwards. The first call
    /// fixes the outcome; later calls report it without recomputing.
    pub fn evaluate(&mut self) -> bool {
        if let Some(outcome) = &self.outcome {
            debug!(operation = %self.operation, "context already evaluated");
            return outcome.is_ok();
        }

        let outcome = self.run();
        match &outcome {
            Ok(value) => debug!(operation = %self.operation, %value, "evaluation succeeded"),
            Err(err) => debug!(operation = %self.operation, error = %err, "evaluation failed"),
        }

        let ok = outcome.is_ok();
        self.outcome = Some(outcome);
        ok
    }

    /// Current status. `AllRight` until an evaluation fails.
    pub fn status(&self) -> OperationalStatus {
        self.outcome
            .as_ref()
            .map(OperationalStatus::from)
            .unwrap_or_default()
    }

    /// The stored outcome, if [`evaluate`](Self::evaluate) has run.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The result value. `None` unless evaluation ran and succeeded.
    pub fn value(&self) -> Option<Value> {
        match self.outcome {
            Some(Ok(value)) => Some(value),
            _ => None,
        }
    }

    fn run(&self) -> Outcome {
        self.validate()?;
        self.dispatch()
    }

    /// Route to exactly one evaluator function.
    fn dispatch(&self) -> Outcome {
        trace!(operation = %self.operation, first = ?self.first, second = ?self.second, "dispatching");

        let first = self.first.ok_or(ValidationError::MissingFirstOperand)?;

        if self.operation == OperationKind::Fact {
            // Non-negativity was established by `validate`.
            let n = u64::try_from(first).map_err(|_| ValidationError::NegativeFactorial)?;
            return evaluator::fact(n).map(Value::Unsigned);
        }

        let binary: fn(i64, i64) -> Result<i64, EvalError> = match self.operation {
            OperationKind::Add => evaluator::add,
            OperationKind::Sub => evaluator::sub,
            OperationKind::Mul => evaluator::mul,
            OperationKind::Div => evaluator::div,
            OperationKind::Pow => evaluator::pow,
            OperationKind::None | OperationKind::Fact => {
                return Err(EvalError::UnsupportedOperation);
            }
        };
        let second = self.second.ok_or(ValidationError::MissingSecondOperand)?;
        binary(first, second).map(Value::Signed)
    }
}

/// Evaluate `operation` over the given operands with a fresh context.
pub fn evaluate(operation: OperationKind, first: Option<i64>, second: Option<i64>) -> Outcome {
    EvaluationContext::new(operation, first, second).run()
}
