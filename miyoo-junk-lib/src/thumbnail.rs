//! Launcher thumbnail generation.
//!
//! A source image is scaled and padded to 250x360 by [`ImageTools::resize_and_pad`],
//! run through [`ImageTools::optimize`], and only then published to the
//! destination. A failure in either tool leaves the destination untouched.

use std::path::{Path, PathBuf};

use miyoo_junk_core::layout::IMAGE_EXTENSION;

use crate::error::ThumbnailError;
use crate::publish::safe_write;
use crate::tools::{Crop, ImageTools, OptimizeOptions, Resolution};

/// A validated thumbnail job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Faster, slightly larger optimization
    pub fast: bool,
    /// Cut the PICO-8 play area out of the source first
    pub pico8: bool,
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(IMAGE_EXTENSION)
}

impl ThumbnailRequest {
    /// Validate paths and resolve the destination.
    ///
    /// Without `output` the thumbnail lands next to the source with a `.png`
    /// extension (a `.png` source is rewritten in place). An explicit
    /// `output` is only accepted for `.png` sources and must itself end in
    /// `.png`.
    pub fn new(
        source: impl Into<PathBuf>,
        output: Option<PathBuf>,
        fast: bool,
        pico8: bool,
    ) -> Result<Self, ThumbnailError> {
        let source = source.into();
        let output = match output {
            None => source.with_extension(IMAGE_EXTENSION),
            Some(output) => {
                if !is_png(&source) {
                    return Err(ThumbnailError::usage(format!(
                        "--output requires a .{IMAGE_EXTENSION} source, got {}",
                        source.display()
                    )));
                }
                if !is_png(&output) {
                    return Err(ThumbnailError::usage(format!(
                        "output must end in .{IMAGE_EXTENSION}, got {}",
                        output.display()
                    )));
                }
                output
            }
        };

        Ok(Self {
            source,
            output,
            fast,
            pico8,
        })
    }
}

/// Run the resize → optimize → publish pipeline for one image.
///
/// Intermediate output goes to a private temp file, so independent requests
/// can run concurrently. Returns the published path.
pub async fn generate_thumbnail<T: ImageTools>(
    tools: &T,
    request: &ThumbnailRequest,
) -> Result<PathBuf, ThumbnailError> {
    let staging = tempfile::Builder::new()
        .prefix("miyoo-thumb-")
        .suffix(&format!(".{IMAGE_EXTENSION}"))
        .tempfile()
        .map_err(|e| ThumbnailError::io(std::env::temp_dir(), e))?
        .into_temp_path();

    let crop = request.pico8.then_some(Crop::PICO8);
    log::debug!(
        "Resizing {} to {}{}",
        request.source.display(),
        Resolution::THUMBNAIL,
        crop.map(|c| format!(" (crop {c})")).unwrap_or_default(),
    );
    tools
        .resize_and_pad(&request.source, &staging, crop, Resolution::THUMBNAIL)
        .await?;

    let options = OptimizeOptions {
        fast: request.fast,
        quiet: true,
        strip: true,
    };
    tools.optimize(&staging, options).await?;

    let data = std::fs::read(&staging).map_err(|e| ThumbnailError::io(&*staging, e))?;
    safe_write(&request.output, &data).map_err(|e| ThumbnailError::io(&request.output, e))?;

    Ok(request.output.clone())
}

#[cfg(test)]
#[path = "tests/thumbnail_tests.rs"]
mod tests;
