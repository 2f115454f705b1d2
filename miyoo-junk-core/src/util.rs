use std::path::Path;

/// Remove a single leading `.` from an entry name.
///
/// Hidden entries keep their thumbnail and playlist names, so
/// `.Final Fantasy VII` and `Final Fantasy VII` resolve to the same stem.
pub fn strip_hidden_prefix(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}

/// Lower-cased extension of a path, without the dot.
pub fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check a path's extension against `ext`, ignoring ASCII case.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hidden_prefix() {
        assert_eq!(strip_hidden_prefix(".Game Title"), "Game Title");
        assert_eq!(strip_hidden_prefix("Game Title"), "Game Title");
        assert_eq!(strip_hidden_prefix("..Twice"), ".Twice");
        assert_eq!(strip_hidden_prefix(""), "");
    }

    #[test]
    fn test_extension_lower() {
        assert_eq!(extension_lower(Path::new("a/Game.GBA")), Some("gba".into()));
        assert_eq!(extension_lower(Path::new("a/archive.tar.gz")), Some("gz".into()));
        assert_eq!(extension_lower(Path::new("a/README")), None);
        assert_eq!(extension_lower(Path::new("a/.hidden")), None);
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("Disc 1.CUE"), "cue"));
        assert!(has_extension(Path::new("Disc 1.cue"), "cue"));
        assert!(!has_extension(Path::new("Disc 1.bin"), "cue"));
        assert!(!has_extension(Path::new("cue"), "cue"));
    }
}
