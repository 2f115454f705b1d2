use std::path::PathBuf;
use std::process::ExitCode;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_junk_lib::{AuditReport, SdCard, Settings, audit_missing_images, resolve_sdcard_path};

use crate::CliError;

/// Run the missing-imgs command.
///
/// Missing entries are printed to stdout one per line, relative to the card
/// root. Exits with 1 if any were found so the command can gate scripts.
pub(crate) fn run_missing_imgs(
    settings: &Settings,
    sdcard_dir: Option<PathBuf>,
) -> Result<ExitCode, CliError> {
    let card = SdCard::new(resolve_sdcard_path(sdcard_dir, settings));
    log::debug!("Checking preview images in {}", card.root().display());

    let report = audit_missing_images(&card, &settings.layout, |path| {
        println!("{}", path.display());
    })?;

    log::debug!(
        "{} consoles checked, {} missing",
        report.consoles_checked,
        report.missing.len(),
    );
    if !report.unconfigured.is_empty() {
        log::debug!(
            "{}",
            format!("No config for: {}", report.unconfigured.join(", "))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(audit_exit_code(&report))
}

/// Exit code for a finished audit: failure when anything is missing.
fn audit_exit_code(report: &AuditReport) -> ExitCode {
    if report.has_missing() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
