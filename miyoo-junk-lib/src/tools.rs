//! External image tools.
//!
//! The thumbnail pipeline talks to [`ImageTools`] rather than to processes
//! directly, so it can be driven by a fake in tests. [`ExternalTools`] is the
//! real implementation: ImageMagick's `magick` for resizing and `imgoptim`
//! for lossless PNG optimization.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use thiserror::Error;
use tokio::process::Command;

/// Default ImageMagick entry point.
pub const DEFAULT_MAGICK: &str = "magick";

/// Default lossless optimizer.
pub const DEFAULT_IMGOPTIM: &str = "imgoptim";

/// An output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Launcher thumbnail size.
    pub const THUMBNAIL: Resolution = Resolution {
        width: 250,
        height: 360,
    };
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A crop rectangle, formatted as an ImageMagick geometry (`WxH+X+Y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Crop {
    /// Playable 128x128 frame inside a PICO-8 screenshot.
    pub const PICO8: Crop = Crop {
        width: 128,
        height: 128,
        x: 16,
        y: 24,
    };
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Flags passed to the optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Trade compression ratio for speed
    pub fast: bool,
    pub quiet: bool,
    /// Drop metadata chunks
    pub strip: bool,
}

/// A tool ran but exited unsuccessfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessError {
    pub program: String,
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub message: Option<String>,
    /// Arguments the tool was invoked with.
    pub args: Vec<String>,
}

impl ProcessError {
    pub fn new(program: impl Into<String>, code: Option<i32>) -> Self {
        Self {
            program: program.into(),
            code,
            message: None,
            args: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_args(mut self, args: &[OsString]) -> Self {
        self.args = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.program)?;
        match self.code {
            Some(code) => write!(f, "exit {code}")?,
            None => write!(f, "killed by signal")?,
        }
        if let Some(message) = &self.message {
            write!(f, " - {message}")?;
        }
        if !self.args.is_empty() {
            write!(f, ": {:?}", self.args)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProcessError {}

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The program could not be started (not installed, not executable, ...)
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl ToolError {
    /// Exit code of the failed tool, if it ran and exited.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolError::Process(e) => e.code,
            ToolError::Spawn { .. } => None,
        }
    }
}

/// The image operations the thumbnail pipeline needs.
#[allow(async_fn_in_trait)]
pub trait ImageTools {
    /// Scale `source` to fit `size`, pad with transparency to exactly `size`
    /// (centered), and write the result to `target`. When `crop` is set the
    /// region is cut out of the source first.
    async fn resize_and_pad(
        &self,
        source: &Path,
        target: &Path,
        crop: Option<Crop>,
        size: Resolution,
    ) -> Result<(), ToolError>;

    /// Losslessly optimize `path` in place.
    async fn optimize(&self, path: &Path, options: OptimizeOptions) -> Result<(), ToolError>;
}

/// [`ImageTools`] backed by the `magick` and `imgoptim` command-line tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTools {
    magick: String,
    imgoptim: String,
}

impl Default for ExternalTools {
    fn default() -> Self {
        Self::new(DEFAULT_MAGICK, DEFAULT_IMGOPTIM)
    }
}

impl ExternalTools {
    pub fn new(magick: impl Into<String>, imgoptim: impl Into<String>) -> Self {
        Self {
            magick: magick.into(),
            imgoptim: imgoptim.into(),
        }
    }

    /// `magick` arguments for [`ImageTools::resize_and_pad`].
    pub fn resize_args(
        source: &Path,
        target: &Path,
        crop: Option<Crop>,
        size: Resolution,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![source.into()];
        if let Some(crop) = crop {
            args.push("-crop".into());
            args.push(crop.to_string().into());
        }
        let size = size.to_string();
        let size = size.as_str();
        for arg in [
            "-scale",
            size,
            "-background",
            "transparent",
            "-gravity",
            "center",
            "-extent",
            size,
        ] {
            args.push(arg.into());
        }
        args.push(target.into());
        args
    }

    /// `imgoptim` arguments for optimizing `paths`.
    pub fn optimize_args(paths: &[&Path], options: OptimizeOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if options.fast {
            args.push("--fast".into());
        }
        if options.quiet {
            args.push("--quiet".into());
        }
        if options.strip {
            args.push("--strip".into());
        }
        args.push("--".into());
        args.extend(paths.iter().map(|p| OsString::from(*p)));
        args
    }
}

/// Run `program` to completion, mapping a non-zero exit to [`ProcessError`].
async fn run_tool(program: &str, args: &[OsString], failure: &str) -> Result<(), ToolError> {
    log::debug!("Running {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| ToolError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ProcessError::new(program, status.code())
            .with_message(failure)
            .with_args(args)
            .into())
    }
}

impl ImageTools for ExternalTools {
    async fn resize_and_pad(
        &self,
        source: &Path,
        target: &Path,
        crop: Option<Crop>,
        size: Resolution,
    ) -> Result<(), ToolError> {
        let args = Self::resize_args(source, target, crop, size);
        run_tool(&self.magick, &args, "resize failed").await
    }

    async fn optimize(&self, path: &Path, options: OptimizeOptions) -> Result<(), ToolError> {
        let args = Self::optimize_args(&[path], options);
        run_tool(&self.imgoptim, &args, "optimization failed").await
    }
}

#[cfg(test)]
#[path = "tests/tools_tests.rs"]
mod tests;
