use std::path::PathBuf;

use thiserror::Error;

use miyoo_junk_core::ConfigError;

use crate::tools::ToolError;

/// Errors that abort a missing-image audit.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A directory on the card could not be listed
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An emulator config exists but is malformed
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AuditError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while generating playlists.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The multi-disc console folder does not exist
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while generating a thumbnail.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Bad combination of source/output paths; nothing was run
    #[error("Usage error: {0}")]
    Usage(String),

    /// An external image tool failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThumbnailError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
