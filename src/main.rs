use std::process::ExitCode;

use clap::Parser;
use i18n_validator::cli::{Arguments, ExitStatus, init_tracing, print_error, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
