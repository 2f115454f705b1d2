//! SD card directory layout.
//!
//! The card follows the Miyoo Mini launcher convention:
//!
//! ```text
//! <root>/
//!   Roms/<Emu>/...          ROM files, one folder per emulator
//!   Roms/<Emu>/Imgs/*.png   preview images, named after the ROM stem
//!   Emu/<Emu>/config.json   emulator launcher config (extlist, ...)
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Folder holding one subdirectory of ROMs per emulator.
pub const ROMS_DIR: &str = "Roms";

/// Folder holding one subdirectory of launcher config per emulator.
pub const EMU_DIR: &str = "Emu";

/// Per-console folder holding preview images.
pub const IMAGES_DIR: &str = "Imgs";

/// Launcher config file inside `Emu/<name>/`.
pub const CONFIG_FILE: &str = "config.json";

pub const IMAGE_EXTENSION: &str = "png";
pub const PLAYLIST_EXTENSION: &str = "m3u";

/// A mounted SD card (or a copy of one on disk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdCard {
    root: PathBuf,
}

impl SdCard {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/Roms`
    pub fn roms_dir(&self) -> PathBuf {
        self.root.join(ROMS_DIR)
    }

    /// `<root>/Roms/<name>`
    pub fn console_dir(&self, name: &str) -> PathBuf {
        self.roms_dir().join(name)
    }

    /// `<root>/Emu/<name>/config.json`.
    ///
    /// `name` is the config directory name; aliases must already be applied.
    pub fn emu_config_path(&self, name: &str) -> PathBuf {
        self.root.join(EMU_DIR).join(name).join(CONFIG_FILE)
    }

    /// Path relative to the card root, or the path unchanged if it lies outside.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Expected preview image for a ROM stem: `<rom_dir>/Imgs/<stem>.png`.
pub fn image_path_for(rom_dir: &Path, stem: impl AsRef<OsStr>) -> PathBuf {
    let mut name = stem.as_ref().to_os_string();
    name.push(".");
    name.push(IMAGE_EXTENSION);
    rom_dir.join(IMAGES_DIR).join(name)
}
