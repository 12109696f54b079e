//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Version string shown by `--version` (long form).
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ntarget: ",
    env!("TARGET"),
);

/// Usage examples appended to `--help`.
pub const EXAMPLES: &str = "\
Examples:
  intcalc -a 2 -b 3 -o +
  intcalc -a 5 --op fact
  intcalc -a 2 -b 10 --op pow --format json";
