//! Shared types used across all modules.
//!
//! This module defines the operation tag, result values, statuses and
//! output format. Other modules import from here rather than reaching
//! into each other's internals.

pub mod operation;
pub mod status;
pub mod value;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use operation::OperationKind;
pub use status::{EvalError, OperationalStatus, ValidationError};
pub use value::Value;

/// Result of a single evaluation.
pub type Outcome = Result<Value, EvalError>;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "text")]
    #[value(alias = "text")]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Terminal.to_string(), "terminal");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn output_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(w.format, OutputFormat::Json);
        let w: Wrapper = toml::from_str("format = \"text\"").unwrap();
        assert_eq!(w.format, OutputFormat::Terminal);
    }
}
