//! junit-badge CLI - shields.io endpoint badge from a JUnit report

use clap::error::ErrorKind;
use clap::Parser;
use junit_badge_cli::commands;
use junit_badge_cli::output::terminal;
use junit_badge_cli::Cli;
use junit_badge_core::{BadgeError, ProcessEnvironment};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(&err),
    };

    terminal::print_banner();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            terminal::print_error(&format!("Failed to resolve working directory: {err}"));
            return ExitCode::FAILURE;
        }
    };

    match commands::badge::run(&cli, &ProcessEnvironment, &cwd) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // Config errors keep their context chain
            let message = match err.downcast_ref::<BadgeError>() {
                Some(badge_err) => badge_err.to_string(),
                None => format!("{err:#}"),
            };
            terminal::print_error(&message);
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{err}");
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument => {
            terminal::print_banner();
            println!("{}", junit_badge_cli::ABOUT);
            terminal::print_error(terminal::USAGE_HINT);
            ExitCode::FAILURE
        }
        _ => {
            terminal::print_banner();
            print!("{err}");
            ExitCode::FAILURE
        }
    }
}
