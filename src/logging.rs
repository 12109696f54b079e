//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer so stdout
//! carries nothing but the rendered result.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Errors while building or installing a subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}'")]
    Filter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install log subscriber")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Resolve the effective filter directive.
///
/// Each `-v` steps one level above the configured one; the configured
/// directive is kept as-is when no `-v` is given so custom per-target
/// filters survive.
pub fn filter_directive(configured: &str, verbose: u8) -> String {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

    if verbose == 0 {
        return configured.to_string();
    }

    let base = LEVELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(configured.trim()))
        .unwrap_or(1);
    let idx = (base + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[idx].to_string()
}

/// Parse a filter directive.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        directive: directive.to_string(),
        source,
    })
}

/// Parse `directive`, falling back to the default level when it is invalid.
fn filter_or_default(directive: &str, warn: bool) -> EnvFilter {
    parse_filter(directive).unwrap_or_else(|err| {
        if warn {
            eprintln!(
                "Warning: ignoring {err:#}, using '{}'",
                constants::DEFAULT_LOG_LEVEL
            );
        }
        EnvFilter::new(constants::DEFAULT_LOG_LEVEL)
    })
}

fn subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}

/// Run `f` with a temporary stderr subscriber.
///
/// Used before the final filter is known (e.g. while config files are
/// read). An invalid directive silently falls back here; [`init`] reports
/// it once the configured level is resolved.
pub fn scoped<T>(directive: &str, f: impl FnOnce() -> T) -> T {
    let subscriber = subscriber(filter_or_default(directive, false));
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global stderr subscriber.
///
/// An invalid directive is not fatal: a warning is printed and the default
/// level is used instead.
pub fn init(directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::util::SubscriberInitExt;

    subscriber(filter_or_default(directive, true)).try_init()?;
    Ok(())
}
