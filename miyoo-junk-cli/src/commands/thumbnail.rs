use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use miyoo_junk_lib::{Settings, ThumbnailRequest, generate_thumbnail};

use crate::CliError;

/// Run the thumbnail command.
///
/// All requests are validated before any tool runs. Images are processed one
/// after another; a failure is reported and the rest still run.
pub(crate) fn run_thumbnail(
    settings: &Settings,
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    fast: bool,
    pico8: bool,
) -> Result<(), CliError> {
    let requests = build_requests(paths, output, fast, pico8)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(e.to_string()))?;
    let tools = settings.tools.external_tools();

    if requests.len() == 1 {
        let path = rt.block_on(generate_thumbnail(&tools, &requests[0]))?;
        log_written(&requests[0], &path);
        return Ok(());
    }

    let mut failed = 0usize;
    for request in &requests {
        match rt.block_on(generate_thumbnail(&tools, request)) {
            Ok(path) => log_written(request, &path),
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{} {}: {}",
                    "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                    request.source.display(),
                    e,
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::other(format!(
            "{} of {} thumbnails failed",
            failed,
            requests.len()
        )));
    }
    Ok(())
}

/// Validate every source up front so a bad argument fails before any tool runs.
fn build_requests(
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    fast: bool,
    pico8: bool,
) -> Result<Vec<ThumbnailRequest>, CliError> {
    if output.is_some() && paths.len() > 1 {
        return Err(CliError::usage(
            "--output can only be used with a single source image",
        ));
    }

    let requests = paths
        .into_iter()
        .map(|source| ThumbnailRequest::new(source, output.clone(), fast, pico8))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(requests)
}

fn log_written(request: &ThumbnailRequest, path: &Path) {
    log::info!(
        "{} {} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        request.source.display(),
        "\u{2192}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}
