use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use longcalc::interpreter::evaluator::core::Calculator;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// longcalc evaluates integer arithmetic with unlimited precision.
///
/// Supports `+`, `-`, `*`, `/` (truncating toward zero) and unary minus.
/// Example: longcalc "2 + 3 * 4 - -2"
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Quote it so the shell keeps it as one
    /// argument.
    expression: Option<String>,
}

/// Environment variable holding the log filter, e.g. `LONGCALC_LOG=debug`.
const LOG_ENV: &str = "LONGCALC_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let Some(expression) = args.expression else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("Failed to print usage: {e}");
        }
        return ExitCode::SUCCESS;
    };

    debug!(%expression, "evaluating");

    let mut calculator = Calculator::new();
    match calculator.process(&expression) {
        Ok(value) => {
            debug!(digits = value.digit_count(), "evaluated");
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            warn!(position = calculator.position(), "evaluation failed: {e}");
            println!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
