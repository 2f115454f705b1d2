use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_junk_lib::{PlaylistOptions, SdCard, Settings, generate_playlists, resolve_sdcard_path};

use crate::CliError;

/// Run the m3u command over the multi-disc console's ROM folder.
pub(crate) fn run_m3u(
    settings: &Settings,
    sdcard_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), CliError> {
    let card = SdCard::new(resolve_sdcard_path(sdcard_dir, settings));
    let scan_root = card.console_dir(&settings.layout.multi_disc_console);

    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let report = generate_playlists(&scan_root, &PlaylistOptions { dry_run })?;

    log::debug!(
        "{}: {} written, {} unchanged",
        scan_root.display(),
        report.written.len(),
        report.unchanged,
    );
    Ok(())
}
