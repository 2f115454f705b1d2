//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "miyoo-junk")]
#[command(about = "Maintenance tools for a Miyoo Mini SD card", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List ROMs without a preview image (exits with 1 if any are missing)
    MissingImgs {
        /// SD card root (defaults to card.root from settings, then the current directory)
        sdcard_dir: Option<PathBuf>,
    },

    /// Write .m3u playlists for multi-disc titles
    M3u {
        /// SD card root (defaults to card.root from settings, then the current directory)
        sdcard_dir: Option<PathBuf>,

        /// Show which playlists would be written without writing them
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Build 250x360 launcher thumbnails from source images
    Thumbnail {
        /// Destination (.png); only valid for a single .png source
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Faster optimization at the cost of a slightly larger file
        #[arg(long)]
        fast: bool,

        /// Crop the 128x128 play area out of a PICO-8 screenshot first
        #[arg(long)]
        pico8: bool,

        /// Source images
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
