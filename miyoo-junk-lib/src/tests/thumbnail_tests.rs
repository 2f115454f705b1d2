use super::*;
use std::cell::RefCell;

use crate::tools::{ProcessError, ToolError};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Resize { crop: Option<Crop>, size: Resolution },
    Optimize(OptimizeOptions),
}

/// Records calls and writes recognizable bytes instead of running tools.
#[derive(Default)]
struct FakeTools {
    calls: RefCell<Vec<Call>>,
    fail_resize: bool,
    fail_optimize: bool,
}

impl ImageTools for FakeTools {
    async fn resize_and_pad(
        &self,
        _source: &Path,
        target: &Path,
        crop: Option<Crop>,
        size: Resolution,
    ) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(Call::Resize { crop, size });
        if self.fail_resize {
            return Err(ProcessError::new("magick", Some(1)).into());
        }
        std::fs::write(target, b"resized").unwrap();
        Ok(())
    }

    async fn optimize(&self, path: &Path, options: OptimizeOptions) -> Result<(), ToolError> {
        self.calls.borrow_mut().push(Call::Optimize(options));
        if self.fail_optimize {
            return Err(ProcessError::new("imgoptim", Some(2))
                .with_message("optimization failed")
                .into());
        }
        let mut data = std::fs::read(path).unwrap();
        data.extend_from_slice(b"+optimized");
        std::fs::write(path, data).unwrap();
        Ok(())
    }
}

const QUIET_STRIP: OptimizeOptions = OptimizeOptions {
    fast: false,
    quiet: true,
    strip: true,
};

#[test]
fn test_default_output_replaces_extension() {
    let req = ThumbnailRequest::new("art/Game.jpg", None, false, false).unwrap();
    assert_eq!(req.output, PathBuf::from("art/Game.png"));
}

#[test]
fn test_png_source_defaults_to_in_place() {
    let req = ThumbnailRequest::new("Imgs/Game.png", None, false, false).unwrap();
    assert_eq!(req.output, PathBuf::from("Imgs/Game.png"));
}

#[test]
fn test_explicit_output_with_png_source() {
    let req =
        ThumbnailRequest::new("shot.png", Some(PathBuf::from("Imgs/Game.png")), true, true).unwrap();
    assert_eq!(req.output, PathBuf::from("Imgs/Game.png"));
    assert!(req.fast);
    assert!(req.pico8);
}

#[test]
fn test_explicit_output_rejects_non_png_source() {
    let err = ThumbnailRequest::new("bar.bmp", Some(PathBuf::from("foo.jpg")), false, false)
        .unwrap_err();
    assert!(matches!(err, ThumbnailError::Usage(_)));

    let err = ThumbnailRequest::new("bar.bmp", Some(PathBuf::from("foo.png")), false, false)
        .unwrap_err();
    assert!(matches!(err, ThumbnailError::Usage(_)));
}

#[test]
fn test_explicit_output_must_be_png() {
    let err = ThumbnailRequest::new("bar.png", Some(PathBuf::from("foo.jpg")), false, false)
        .unwrap_err();
    assert!(matches!(err, ThumbnailError::Usage(_)));
}

#[tokio::test]
async fn test_pipeline_publishes_optimized_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Game.png");
    let req = ThumbnailRequest::new("shot.png", Some(output.clone()), false, false).unwrap();
    let tools = FakeTools::default();

    let published = generate_thumbnail(&tools, &req).await.unwrap();

    assert_eq!(published, output);
    assert_eq!(std::fs::read(&output).unwrap(), b"resized+optimized");
    assert_eq!(
        *tools.calls.borrow(),
        [
            Call::Resize {
                crop: None,
                size: Resolution::THUMBNAIL,
            },
            Call::Optimize(QUIET_STRIP),
        ]
    );
}

#[tokio::test]
async fn test_pico8_crops_before_resize() {
    let dir = tempfile::tempdir().unwrap();
    let req =
        ThumbnailRequest::new("pico.png", Some(dir.path().join("pico.png")), false, true).unwrap();
    let tools = FakeTools::default();

    generate_thumbnail(&tools, &req).await.unwrap();

    assert_eq!(
        tools.calls.borrow()[0],
        Call::Resize {
            crop: Some(Crop::PICO8),
            size: Resolution::THUMBNAIL,
        }
    );
}

#[tokio::test]
async fn test_fast_flag_reaches_optimizer() {
    let dir = tempfile::tempdir().unwrap();
    let req = ThumbnailRequest::new("a.png", Some(dir.path().join("a.png")), true, false).unwrap();
    let tools = FakeTools::default();

    generate_thumbnail(&tools, &req).await.unwrap();

    assert_eq!(
        tools.calls.borrow()[1],
        Call::Optimize(OptimizeOptions {
            fast: true,
            ..QUIET_STRIP
        })
    );
}

#[tokio::test]
async fn test_optimize_failure_leaves_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Game.png");
    std::fs::write(&output, b"previous thumbnail").unwrap();
    let req = ThumbnailRequest::new("shot.png", Some(output.clone()), false, false).unwrap();
    let tools = FakeTools {
        fail_optimize: true,
        ..Default::default()
    };

    let err = generate_thumbnail(&tools, &req).await.unwrap_err();

    match err {
        ThumbnailError::Tool(e) => assert_eq!(e.exit_code(), Some(2)),
        other => panic!("expected tool error, got {other:?}"),
    }
    assert_eq!(std::fs::read(&output).unwrap(), b"previous thumbnail");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_optimize_failure_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Game.png");
    let req = ThumbnailRequest::new("shot.png", Some(output.clone()), false, false).unwrap();
    let tools = FakeTools {
        fail_optimize: true,
        ..Default::default()
    };

    assert!(generate_thumbnail(&tools, &req).await.is_err());
    assert!(!output.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_resize_failure_skips_optimizer() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Game.png");
    let req = ThumbnailRequest::new("shot.png", Some(output.clone()), false, false).unwrap();
    let tools = FakeTools {
        fail_resize: true,
        ..Default::default()
    };

    let err = generate_thumbnail(&tools, &req).await.unwrap_err();

    assert!(matches!(err, ThumbnailError::Tool(_)));
    assert_eq!(tools.calls.borrow().len(), 1);
    assert!(!output.exists());
}
