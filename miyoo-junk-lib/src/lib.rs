//! Maintenance operations for a Miyoo Mini style SD card: auditing missing
//! preview images, generating multi-disc playlists, and building launcher
//! thumbnails with external image tools.

pub mod audit;
pub mod error;
pub mod playlist;
pub mod publish;
pub mod settings;
pub mod thumbnail;
pub mod tools;

pub use audit::{AuditReport, audit_missing_images};
pub use error::{AuditError, PlaylistError, ThumbnailError};
pub use playlist::{PlaylistOptions, PlaylistReport, generate_playlists, plan_playlists};
pub use publish::safe_write;
pub use settings::{Settings, load_settings, resolve_sdcard_path, settings_path};
pub use thumbnail::{ThumbnailRequest, generate_thumbnail};
pub use tools::{Crop, ExternalTools, ImageTools, ProcessError, Resolution, ToolError};

// Re-export core types so frontends only need this crate.
pub use miyoo_junk_core::{EmuConfig, LayoutRules, SdCard};
