//! symlink_permute_cmd - alias a command under its permuted name
//!
//! Resolves a command, reverses its name and installs the reversed name as a
//! symlink to the command, unless a command with that name already exists.

use clap::Parser;
use miette::Diagnostic;
use std::process::ExitCode;

mod alias;
mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod logging;
mod outcome;
mod resolver;

use cli::Cli;
use config::Settings;
use error::EXIT_FAILURE;

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(shell) = cli.completions.as_deref() {
        return if commands::completions::run(shell) {
            ExitCode::SUCCESS
        } else {
            exit_code(EXIT_FAILURE)
        };
    }

    // clap guarantees a command whenever --completions is absent
    let Some(token) = cli.command.as_deref() else {
        return exit_code(EXIT_FAILURE);
    };

    match Settings::from_env(&cli).and_then(|settings| commands::permute::run(token, &settings)) {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                println!("{message}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(code) = e.code() {
                tracing::debug!(%code, "run failed");
            }
            eprintln!("{e}");
            exit_code(e.exit_code())
        }
    }
}
