//! Atomic file publishing.

use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Replace `path` with `data` so readers see either the old file or the new
/// one, never a partial write.
///
/// The temp file is created next to the destination so the final rename
/// stays on one filesystem. It is removed if any step fails. A replaced file
/// keeps its permissions; a new file gets the same mode a plain
/// `fs::write` would give it.
pub fn safe_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    if let Some(perms) = new_file_permissions() {
        builder.permissions(perms);
    }
    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    log::debug!("Published {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Creation mode for files that don't exist yet, still filtered by the umask.
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
