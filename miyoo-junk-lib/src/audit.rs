//! Missing preview image audit.
//!
//! Walks `Roms/<Emu>/` for every configured emulator and reports ROM entries
//! that have no `Imgs/<stem>.png` next to them.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use miyoo_junk_core::emu_config::RESERVED_EXTENSION;
use miyoo_junk_core::layout::{IMAGES_DIR, image_path_for};
use miyoo_junk_core::util::{extension_lower, strip_hidden_prefix};
use miyoo_junk_core::{EmuConfig, LayoutRules, SdCard};

use crate::error::AuditError;

/// Result of auditing a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// ROM entries without a preview image, relative to the card root.
    pub missing: Vec<PathBuf>,
    /// Console folders skipped because their `config.json` doesn't exist.
    pub unconfigured: Vec<String>,
    /// Number of console folders that were actually checked.
    pub consoles_checked: usize,
}

impl AuditReport {
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// List a directory's entries in path order.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| AuditError::io(dir, e))?
        .flatten()
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Audit every console folder under `Roms/`.
///
/// `on_missing` is called with each missing entry (relative to the card
/// root) as soon as it is found, so callers can stream results before a
/// later malformed config aborts the run.
pub fn audit_missing_images(
    card: &SdCard,
    rules: &LayoutRules,
    mut on_missing: impl FnMut(&Path),
) -> Result<AuditReport, AuditError> {
    let mut report = AuditReport::default();

    for console_dir in sorted_entries(&card.roms_dir())? {
        if !console_dir.is_dir() {
            continue;
        }
        let Some(console) = console_dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if rules.is_skipped(console) {
            log::debug!("Skipping {console}");
            continue;
        }

        let config_path = card.emu_config_path(rules.config_name(console));
        let Some(config) = EmuConfig::load(&config_path)? else {
            log::debug!("No config for {console} at {}", config_path.display());
            report.unconfigured.push(console.to_string());
            continue;
        };

        let entries = if rules.is_multi_disc(console) {
            missing_multi_disc(&console_dir)?
        } else {
            missing_single_file(&console_dir, &config.extensions())?
        };
        report.consoles_checked += 1;

        for entry in entries {
            let relative = card.relative(&entry).to_path_buf();
            on_missing(&relative);
            report.missing.push(relative);
        }
    }

    Ok(report)
}

/// One ROM per file; only files with an accepted extension count.
fn missing_single_file(
    console_dir: &Path,
    extensions: &HashSet<String>,
) -> Result<Vec<PathBuf>, AuditError> {
    let mut missing = Vec::new();
    for path in sorted_entries(console_dir)? {
        if !path.is_file() {
            continue;
        }
        let Some(ext) = extension_lower(&path) else {
            continue;
        };
        if ext == RESERVED_EXTENSION || !extensions.contains(&ext) {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        if !image_path_for(console_dir, stem).exists() {
            missing.push(path);
        }
    }
    Ok(missing)
}

/// One title per subdirectory. A leading `.` (hidden title) is ignored when
/// looking up the image.
fn missing_multi_disc(console_dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    let mut missing = Vec::new();
    for path in sorted_entries(console_dir)? {
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        if name == IMAGES_DIR {
            continue;
        }
        let stem = name
            .to_str()
            .map(|n| OsStr::new(strip_hidden_prefix(n)))
            .unwrap_or(name);
        if !image_path_for(console_dir, stem).exists() {
            missing.push(path);
        }
    }
    Ok(missing)
}

#[cfg(test)]
#[path = "tests/audit_tests.rs"]
mod tests;
