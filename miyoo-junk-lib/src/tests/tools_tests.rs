use super::*;
use std::path::PathBuf;

fn strings(args: Vec<OsString>) -> Vec<String> {
    args.into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_geometry_formatting() {
    assert_eq!(Resolution::THUMBNAIL.to_string(), "250x360");
    assert_eq!(Crop::PICO8.to_string(), "128x128+16+24");
}

#[test]
fn test_resize_args_without_crop() {
    let args = ExternalTools::resize_args(
        Path::new("shot.jpg"),
        Path::new("/tmp/out.png"),
        None,
        Resolution::THUMBNAIL,
    );
    assert_eq!(
        strings(args),
        [
            "shot.jpg",
            "-scale",
            "250x360",
            "-background",
            "transparent",
            "-gravity",
            "center",
            "-extent",
            "250x360",
            "/tmp/out.png",
        ]
    );
}

#[test]
fn test_resize_args_crop_comes_before_scale() {
    let args = strings(ExternalTools::resize_args(
        Path::new("pico.png"),
        Path::new("out.png"),
        Some(Crop::PICO8),
        Resolution::THUMBNAIL,
    ));
    assert_eq!(&args[..4], ["pico.png", "-crop", "128x128+16+24", "-scale"]);
    assert_eq!(args.last().map(String::as_str), Some("out.png"));
}

#[test]
fn test_optimize_args() {
    let path = PathBuf::from("-weird name.png");
    let all = OptimizeOptions {
        fast: true,
        quiet: true,
        strip: true,
    };
    assert_eq!(
        strings(ExternalTools::optimize_args(&[&path], all)),
        ["--fast", "--quiet", "--strip", "--", "-weird name.png"]
    );
    assert_eq!(
        strings(ExternalTools::optimize_args(&[&path], OptimizeOptions::default())),
        ["--", "-weird name.png"]
    );
}

#[test]
fn test_process_error_display() {
    let err = ProcessError::new("imgoptim", Some(3))
        .with_message("optimization failed")
        .with_args(&[OsString::from("--quiet"), OsString::from("a.png")]);
    assert_eq!(
        err.to_string(),
        r#"imgoptim exit 3 - optimization failed: ["--quiet", "a.png"]"#
    );

    let bare = ProcessError::new("magick", Some(1));
    assert_eq!(bare.to_string(), "magick exit 1");

    let killed = ProcessError::new("magick", None);
    assert_eq!(killed.to_string(), "magick killed by signal");
}

#[cfg(unix)]
#[tokio::test]
async fn test_failing_program_reports_exit_code_and_args() {
    let tools = ExternalTools::new("false", "false");
    let err = tools
        .optimize(Path::new("thumb.png"), OptimizeOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(1));
    match err {
        ToolError::Process(e) => {
            assert_eq!(e.program, "false");
            assert_eq!(e.args, ["--", "thumb.png"]);
            assert_eq!(e.message.as_deref(), Some("optimization failed"));
        }
        other => panic!("expected process error, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_succeeding_program() {
    let tools = ExternalTools::new("true", "true");
    tools
        .resize_and_pad(
            Path::new("in.png"),
            Path::new("out.png"),
            None,
            Resolution::THUMBNAIL,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let tools = ExternalTools::new("miyoo-junk-no-such-tool", "miyoo-junk-no-such-tool");
    let err = tools
        .optimize(Path::new("thumb.png"), OptimizeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Spawn { .. }));
    assert_eq!(err.exit_code(), None);
}
