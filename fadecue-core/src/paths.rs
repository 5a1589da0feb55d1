//! Path conversion between the catalog's Windows paths and the local host.
//!
//! The scene catalog records clips as Windows paths (`C:\Videos\intro.mp4`).
//! On non-Windows hosts these are mapped onto the WSL drive mounts
//! (`/mnt/c/Videos/intro.mp4`).

use std::path::{Path, PathBuf};

/// Maps a Windows path onto its `/mnt/<drive>` mount point.
///
/// Backslashes become forward slashes; paths without a drive letter pass
/// through unchanged apart from the separator rewrite.
#[must_use]
pub fn windows_to_wsl(raw: &str) -> PathBuf {
    if raw.is_empty() {
        return PathBuf::new();
    }

    let normalized = raw.replace('\\', "/");
    let bytes = normalized.as_bytes();
    if bytes.len() > 1 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        let drive = (bytes[0] as char).to_ascii_lowercase();
        let rest = normalized[2..].trim_start_matches('/');
        return Path::new("/mnt").join(drive.to_string()).join(rest);
    }

    PathBuf::from(normalized)
}

/// Resolves a catalog path to a platform-local path.
#[must_use]
pub fn resolve_local_path(raw: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(raw)
    } else {
        windows_to_wsl(raw)
    }
}

/// Renders `path` relative to `repo_root` with forward slashes.
///
/// The root is matched component-wise, so `/repository/clip.mp4` is not
/// under `/repo`. Paths outside the root are returned whole.
#[must_use]
pub fn relative_source_path(path: &Path, repo_root: &Path) -> String {
    match path.strip_prefix(repo_root) {
        Ok(relative) if !repo_root.as_os_str().is_empty() => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => path.to_string_lossy().replace('\\', "/"),
    }
}
