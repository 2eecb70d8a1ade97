//! On-disk cache of release API responses.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::debug;

use crate::error::ReleaseResult;

/// Caches raw response bodies per (version, image type, OS family) so that
/// repeated generator runs within the expiry window do not hit the API.
#[derive(Debug, Clone)]
pub struct ReleaseCache {
    dir: PathBuf,
    expire_after: Duration,
}

impl ReleaseCache {
    pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(3600);

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            expire_after: Self::DEFAULT_EXPIRY,
        }
    }

    pub fn expire_after(mut self, expire_after: Duration) -> Self {
        self.expire_after = expire_after;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, version: u32, image_type: &str, os_family: &str) -> PathBuf {
        self.dir
            .join(format!("{}-{}-{}.json", version, image_type, os_family))
    }

    /// Return a cached body if one exists and has not expired.
    pub fn get(&self, version: u32, image_type: &str, os_family: &str) -> Option<String> {
        let path = self.entry_path(version, image_type, os_family);
        let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);

        if age >= self.expire_after {
            debug!("Cache entry {:?} expired", path);
            return None;
        }

        fs::read_to_string(&path).ok()
    }

    pub fn put(
        &self,
        version: u32,
        image_type: &str,
        os_family: &str,
        body: &str,
    ) -> ReleaseResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(version, image_type, os_family);
        fs::write(&path, body)?;
        debug!("Cached response at {:?}", path);
        Ok(())
    }
}
