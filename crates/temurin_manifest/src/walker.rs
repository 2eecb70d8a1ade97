//! Locating generated Dockerfiles.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::ManifestResult;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Directories below `root` holding a `{version}/{pkg}/{directory}/Dockerfile`.
///
/// Paths are relative to `root`, `/`-separated and sorted. Matching is by
/// whole path components, so `11/jdk` never matches `111/jdk`.
pub fn find_dockerfiles(
    root: &Path,
    version: u32,
    pkg: &str,
    directory: &str,
) -> ManifestResult<Vec<String>> {
    let suffix: PathBuf = [version.to_string().as_str(), pkg]
        .into_iter()
        .chain(directory.split('/'))
        .chain(["Dockerfile"])
        .collect();

    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if !relative.ends_with(&suffix) {
            continue;
        }

        if let Some(parent) = relative.parent() {
            let dir = parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            debug!("Found Dockerfile in {}", dir);
            found.push(dir);
        }
    }

    Ok(found)
}
