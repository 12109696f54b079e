//! App-wide constants.
//!
//! Centralises the version, config paths, environment variable names,
//! and exit codes so a rename only requires changing this file.

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.intcalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".intcalc.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "intcalc";

/// Log level used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "INTCALC_FORMAT";
pub const ENV_LOG: &str = "INTCALC_LOG";
pub const ENV_COLOR: &str = "INTCALC_COLOR";

// ── Process exit codes ──────────────────────────────────────────────

/// The evaluation succeeded (or help/version was printed).
pub const EXIT_OK: i32 = 0;

/// Usage error or any non-`AllRight` status.
pub const EXIT_FAILURE: i32 = 1;
