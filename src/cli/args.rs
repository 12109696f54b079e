//! Clap argument types and conversion into an evaluation context.

use clap::{ArgAction, Parser};

use intcalc::context::EvaluationContext;
use intcalc::models::{OperationKind, OutputFormat};

/// Overflow-checked integer calculator.
#[derive(Parser, Debug)]
#[command(
    name = "intcalc",
    version = intcalc::constants::VERSION,
    long_version = super::LONG_VERSION,
    about = "Overflow-checked integer calculator",
    after_help = super::EXAMPLES,
)]
pub struct Cli {
    /// First integer.
    #[arg(short = 'a', long = "a", value_name = "A", allow_negative_numbers = true)]
    pub first: i64,

    /// Second integer (required for binary operations).
    #[arg(short = 'b', long = "b", value_name = "B", allow_negative_numbers = true)]
    pub second: Option<i64>,

    /// Operation: add(+), sub(-), mul(*), div(/), pow(^), fact(!).
    #[arg(short = 'o', long = "op", value_name = "OP", allow_hyphen_values = true)]
    pub op: OperationKind,

    /// Output format (default: from config, else terminal).
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Hand the parsed operands to the evaluation core.
    pub fn to_context(&self) -> EvaluationContext {
        EvaluationContext::new(self.op, Some(self.first), self.second)
    }
}
