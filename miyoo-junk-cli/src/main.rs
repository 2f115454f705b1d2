//! miyoo-junk CLI
//!
//! Command-line interface for maintaining a Miyoo Mini SD card.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    let settings = miyoo_junk_lib::load_settings();

    let result = match cli.command {
        Commands::MissingImgs { sdcard_dir } => {
            commands::missing_imgs::run_missing_imgs(&settings, sdcard_dir)
        }
        Commands::M3u {
            sdcard_dir,
            dry_run,
        } => commands::m3u::run_m3u(&settings, sdcard_dir, dry_run).map(|()| ExitCode::SUCCESS),
        Commands::Thumbnail {
            output,
            fast,
            pico8,
            paths,
        } => commands::thumbnail::run_thumbnail(&settings, paths, output, fast, pico8)
            .map(|()| ExitCode::SUCCESS),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&settings).map(|()| ExitCode::SUCCESS)
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(ExitCode::SUCCESS)
            }
        },
    };

    match result {
        Ok(code) => code,
        Err(CliError::Usage(msg)) => usage_error(&msg).exit(),
        Err(e) => {
            eprintln!("{} {}", "error:".if_supports_color(Stderr, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}

/// Usage errors are reported through clap so they share its format and exit code.
fn usage_error(msg: &str) -> clap::Error {
    Cli::command().error(ErrorKind::ArgumentConflict, msg)
}
