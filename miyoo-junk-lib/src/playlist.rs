//! `.m3u` playlists for multi-disc titles.
//!
//! Each title is a folder of disc images under the console's ROM folder:
//!
//! ```text
//! Roms/PS/Final Fantasy VII/FF7 (Disc 1).cue
//! Roms/PS/Final Fantasy VII/FF7 (Disc 2).cue
//! Roms/PS/Final Fantasy VII.m3u        <- generated
//! ```
//!
//! The playlist lists the title's `.cue` files relative to the console
//! folder, sorted, one per line, without a trailing newline.

use std::io;
use std::path::{Path, PathBuf};

use miyoo_junk_core::layout::PLAYLIST_EXTENSION;
use miyoo_junk_core::util::{has_extension, strip_hidden_prefix};

use crate::error::PlaylistError;
use crate::publish::safe_write;

const DISC_EXTENSION: &str = "cue";

/// What needs to happen to one title's playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistStatus {
    Create,
    Update,
    Unchanged,
}

/// The expected playlist for one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistPlan {
    /// `<scan root>/<title>.m3u`
    pub path: PathBuf,
    pub content: String,
    pub status: PlaylistStatus,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistOptions {
    /// Report what would be written without touching the card
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistReport {
    /// Playlists written (or that would be, in dry-run mode).
    pub written: Vec<PathBuf>,
    pub unchanged: usize,
}

/// Work out the playlist for every title folder under `scan_root`.
///
/// Folders without any `.cue` file are left out entirely.
pub fn plan_playlists(scan_root: &Path) -> Result<Vec<PlaylistPlan>, PlaylistError> {
    if !scan_root.is_dir() {
        return Err(PlaylistError::MissingDirectory(scan_root.to_path_buf()));
    }

    let mut titles: Vec<PathBuf> = std::fs::read_dir(scan_root)
        .map_err(|e| PlaylistError::io(scan_root, e))?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    titles.sort();

    let mut plans = Vec::new();
    for title_dir in titles {
        let Some(dir_name) = title_dir.file_name().map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };

        let mut discs: Vec<String> = std::fs::read_dir(&title_dir)
            .map_err(|e| PlaylistError::io(&title_dir, e))?
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && has_extension(p, DISC_EXTENSION))
            .filter_map(|p| {
                p.file_name()
                    .map(|f| format!("{}/{}", dir_name, f.to_string_lossy()))
            })
            .collect();
        if discs.is_empty() {
            log::debug!("No disc files in {}", title_dir.display());
            continue;
        }
        discs.sort();

        let content = discs.join("\n");
        let path = scan_root.join(format!(
            "{}.{}",
            strip_hidden_prefix(&dir_name),
            PLAYLIST_EXTENSION
        ));
        let status = match std::fs::read(&path) {
            Ok(existing) if existing == content.as_bytes() => PlaylistStatus::Unchanged,
            Ok(_) => PlaylistStatus::Update,
            Err(e) if e.kind() == io::ErrorKind::NotFound => PlaylistStatus::Create,
            Err(e) => return Err(PlaylistError::io(&path, e)),
        };

        plans.push(PlaylistPlan {
            path,
            content,
            status,
        });
    }

    Ok(plans)
}

/// Write every playlist under `scan_root` that is missing or out of date.
///
/// Re-running on an unchanged tree writes nothing.
pub fn generate_playlists(
    scan_root: &Path,
    options: &PlaylistOptions,
) -> Result<PlaylistReport, PlaylistError> {
    let mut report = PlaylistReport::default();

    for plan in plan_playlists(scan_root)? {
        if plan.status == PlaylistStatus::Unchanged {
            report.unchanged += 1;
            continue;
        }

        if options.dry_run {
            log::info!("Would write {}", plan.path.display());
        } else {
            log::info!("Writing {}", plan.path.display());
            safe_write(&plan.path, plan.content.as_bytes())
                .map_err(|e| PlaylistError::io(&plan.path, e))?;
        }
        report.written.push(plan.path);
    }

    Ok(report)
}
