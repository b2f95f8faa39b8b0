//! Project root detection.

use std::path::{Path, PathBuf};

/// Find the Unreal project root: the closest directory at or above `start`
/// that directly contains a `*.uproject` file.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| contains_uproject(dir))
        .map(Path::to_path_buf)
}

fn contains_uproject(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };

    entries
        .flatten()
        .any(|entry| entry.path().extension().is_some_and(|ext| ext == "uproject"))
}
