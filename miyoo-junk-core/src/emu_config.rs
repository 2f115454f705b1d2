//! Emulator launcher config (`Emu/<name>/config.json`).
//!
//! Only `extlist` is read; every other field the launcher uses is ignored.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Launcher pseudo-extension for shortcut commands. Never a ROM.
pub const RESERVED_EXTENSION: &str = "miyoocmd";

/// The subset of an emulator's `config.json` this crate cares about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmuConfig {
    /// `|`-delimited list of accepted extensions, without leading dots.
    pub extlist: String,
}

impl EmuConfig {
    /// Load a config file.
    ///
    /// Returns `Ok(None)` when the file does not exist: emulators without a
    /// config are simply not set up yet. A file that exists but does not
    /// parse, or lacks `extlist`, is an error.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::io(path, e)),
        };
        Self::from_json(&contents)
            .map(Some)
            .map_err(|e| ConfigError::parse(path, e))
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Accepted extensions, lower-cased, without the reserved `miyoocmd` token.
    pub fn extensions(&self) -> HashSet<String> {
        self.extlist
            .split('|')
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty() && ext != RESERVED_EXTENSION)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/emu_config_tests.rs"]
mod tests;
