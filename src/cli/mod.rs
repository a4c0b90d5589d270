use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod exit_status;
mod hints;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use hints::{Hint, HintedError};
pub use report::print_error;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let started = Instant::now();
    let result = run::run(args)?;
    report::print(&result);
    report::print_timing(started.elapsed());

    Ok(result.exit_status())
}

/// Install the diagnostics subscriber.
///
/// `RUST_LOG` wins; otherwise only warnings are shown, or this crate's debug
/// output with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "i18n_validator=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
