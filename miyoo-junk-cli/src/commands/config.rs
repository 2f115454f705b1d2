use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_junk_lib::Settings;
use miyoo_junk_lib::settings::{settings_path, settings_string};

use crate::CliError;

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    log::info!(
        "Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    log::info!("");

    let text = settings_string(settings).map_err(|e| CliError::config(e.to_string()))?;
    log::info!("{}", text.trim_end());
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
