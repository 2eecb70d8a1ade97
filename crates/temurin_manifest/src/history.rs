//! Git access used for commit reconciliation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{ManifestError, ManifestResult};

/// Outcome of comparing one file between two commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobComparison {
    Identical,
    Changed,
    /// The file does not exist at one of the commits, or the commit is unknown.
    Unreachable,
}

impl BlobComparison {
    pub fn is_identical(self) -> bool {
        self == BlobComparison::Identical
    }
}

/// Source history queries needed to decide which commit an entry points at.
#[cfg_attr(test, mockall::automock)]
pub trait SourceHistory {
    /// Hash of the commit currently checked out.
    fn head_commit(&self) -> ManifestResult<String>;

    /// Compare `path` as stored at `current` with `path` as stored at `previous`.
    fn compare_file(
        &self,
        current: &str,
        previous: &str,
        path: &str,
    ) -> ManifestResult<BlobComparison>;
}

/// [`SourceHistory`] backed by the `git` executable.
#[derive(Debug)]
pub struct GitHistory {
    repo_path: PathBuf,
}

impl GitHistory {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Check if Git is available on the system.
    pub fn is_git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl SourceHistory for GitHistory {
    fn head_commit(&self) -> ManifestResult<String> {
        let output = Command::new("git")
            .args(["log", "-1", "--pretty=format:%H"])
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| ManifestError::Git(format!("Failed to run git log: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ManifestError::Git(format!("git log failed: {}", stderr.trim())));
        }

        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if hash.is_empty() {
            return Err(ManifestError::Git("No commits found".to_string()));
        }

        Ok(hash)
    }

    fn compare_file(
        &self,
        current: &str,
        previous: &str,
        path: &str,
    ) -> ManifestResult<BlobComparison> {
        let status = Command::new("git")
            .args([
                "diff",
                "--quiet",
                &format!("{}:{}", current, path),
                &format!("{}:{}", previous, path),
            ])
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| ManifestError::Git(format!("Failed to run git diff: {}", e)))?
            .status;

        let comparison = match status.code() {
            Some(0) => BlobComparison::Identical,
            Some(1) => BlobComparison::Changed,
            _ => BlobComparison::Unreachable,
        };
        debug!("{} at {} vs {}: {:?}", path, current, previous, comparison);

        Ok(comparison)
    }
}
