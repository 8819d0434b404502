//! The `lexigrid` puzzle generator.

use std::process::ExitCode;

use clap::Parser as _;
use lexigrid_cli::Cli;

fn main() -> ExitCode {
    better_panic::install();
    let cli = Cli::parse();
    lexigrid_cli::init_logger(cli.verbose);

    match lexigrid_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
