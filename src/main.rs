//! intcalc — overflow-checked integer calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages. Evaluation
//! failures are not errors here: they are rendered as a status and
//! mapped to the exit code.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::args::Cli;
use intcalc::config::Config;
use intcalc::constants::{DEFAULT_LOG_LEVEL, ENV_LOG, EXIT_FAILURE, EXIT_OK};
use intcalc::env::Env;
use intcalc::logging;
use intcalc::models::OutputFormat;
use intcalc::output::Report;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version are requests, not failures.
            let code = if err.use_stderr() { EXIT_FAILURE } else { EXIT_OK };
            let _ = err.print();
            process::exit(code);
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(EXIT_FAILURE);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let env = Env::real();

    // Config files are read before the configured level is known.
    let bootstrap = logging::filter_directive(
        env.get(ENV_LOG).as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        cli.verbose,
    );
    let config = logging::scoped(&bootstrap, || Config::load(Some(&cwd), &env))
        .context("failed to load configuration")?;

    let directive = logging::filter_directive(&config.log.level, cli.verbose);
    logging::init(&directive).context("failed to initialise logging")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.format.unwrap_or(config.output.format);

    info!(operation = %cli.op, first = cli.first, second = ?cli.second, %format, "evaluating");

    let mut ctx = cli.to_context();
    let ok = ctx.evaluate();
    let report = Report::from_context(&ctx).context("evaluation produced no outcome")?;
    let rendered = format.render(&report);

    // JSON consumers read stdout regardless of status.
    if ok || format == OutputFormat::Json {
        print!("{rendered}");
    } else {
        eprint!("{rendered}");
    }

    Ok(if ok { EXIT_OK } else { EXIT_FAILURE })
}
