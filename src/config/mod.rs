//! Configuration loading and layering.
//!
//! Handles `.intcalc.toml` loading, environment variable resolution,
//! and the defaults CLI flags are merged over.

pub mod loader;

pub use loader::{Config, ConfigError, LogConfig, OutputConfig};
