use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod profile;

fn main() -> ExitCode {
    // Usage problems exit 1; help and version are not failures.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match commands::run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[E] {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
