//! Terminal renderer: a single `Result:` or `Error:` line.

use colored::Colorize;

use crate::output::{OutputRenderer, Report};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &Report) -> String {
        match &report.outcome {
            Ok(value) => format!("{} {}\n", "Result:".green().bold(), value.to_string().bold()),
            Err(err) => {
                let status = report.status();
                format!(
                    "{} {} {}\n",
                    "Error:".red().bold(),
                    err,
                    format!("(code {})", status.code()).dimmed(),
                )
            }
        }
    }
}
