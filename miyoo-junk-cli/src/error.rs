use thiserror::Error;

use miyoo_junk_lib::{AuditError, PlaylistError, ThumbnailError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Invalid combination of arguments
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error(transparent)]
    Thumbnail(ThumbnailError),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl From<ThumbnailError> for CliError {
    fn from(e: ThumbnailError) -> Self {
        match e {
            ThumbnailError::Usage(msg) => Self::Usage(msg),
            other => Self::Thumbnail(other),
        }
    }
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
