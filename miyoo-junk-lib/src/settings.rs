//! User settings (`~/.config/miyoo-junk/settings.toml`).
//!
//! Every field is optional; a missing file means all defaults.
//!
//! ```toml
//! [card]
//! root = "/run/media/me/MIYOO"
//!
//! [layout]
//! skip = ["DOS", "PORTS", "PICO"]
//! multi_disc_console = "PS"
//!
//! [layout.aliases]
//! PS = "PSX"
//!
//! [tools]
//! magick = "magick"
//! imgoptim = "imgoptim"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use miyoo_junk_core::LayoutRules;

use crate::tools::{DEFAULT_IMGOPTIM, DEFAULT_MAGICK, ExternalTools};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub card: CardSettings,
    pub layout: LayoutRules,
    pub tools: ToolSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    /// SD card used when no path is given on the command line
    pub root: Option<PathBuf>,
}

/// Program names (or paths) of the external image tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub magick: String,
    pub imgoptim: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            magick: DEFAULT_MAGICK.to_string(),
            imgoptim: DEFAULT_IMGOPTIM.to_string(),
        }
    }
}

impl ToolSettings {
    pub fn external_tools(&self) -> ExternalTools {
        ExternalTools::new(&self.magick, &self.imgoptim)
    }
}

/// Canonical path to the settings file: `~/.config/miyoo-junk/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("miyoo-junk").join("settings.toml")
}

/// Parse settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Load settings from [`settings_path`].
///
/// A missing file gives the defaults. A file that doesn't parse is reported
/// and ignored rather than blocking every command.
pub fn load_settings() -> Settings {
    let path = settings_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Settings::default();
    };
    match parse_settings(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Resolve the SD card root using a priority chain:
///
/// 1. CLI argument (if `Some`)
/// 2. `card.root` in `settings.toml`
/// 3. Current working directory
pub fn resolve_sdcard_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = &settings.card.root {
        return p.clone();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// The effective settings as pretty-printed TOML, for display.
pub fn settings_string(settings: &Settings) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(settings)
}
