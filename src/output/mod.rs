//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::context::EvaluationContext;
use crate::models::{OperationKind, OperationalStatus, OutputFormat, Outcome};

/// Everything a renderer needs to describe one finished evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub operation: OperationKind,
    pub first: Option<i64>,
    pub second: Option<i64>,
    pub outcome: Outcome,
}

impl Report {
    /// Snapshot an evaluated context. `None` if it was never evaluated.
    pub fn from_context(ctx: &EvaluationContext) -> Option<Self> {
        let outcome = ctx.outcome()?.clone();
        Some(Self {
            operation: ctx.operation(),
            first: ctx.first(),
            // The second operand plays no part in unary operations.
            second: if ctx.operation().is_unary() { None } else { ctx.second() },
            outcome,
        })
    }

    pub fn status(&self) -> OperationalStatus {
        OperationalStatus::from(&self.outcome)
    }
}

/// Trait for rendering an evaluation report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string (including the trailing newline).
    fn render(&self, report: &Report) -> String;
}

impl OutputFormat {
    /// Render a report using the renderer for this format.
    pub fn render(&self, report: &Report) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(report),
            OutputFormat::Json => json::JsonRenderer.render(report),
        }
    }
}
