//! The manifest currently published in docker-library/official-images.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ManifestError, ManifestResult};

/// Location of the published Eclipse Temurin manifest.
pub const OFFICIAL_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/docker-library/official-images/master/library/eclipse-temurin";

const TAGS_FIELD: &str = "Tags:";
const GIT_COMMIT_FIELD: &str = "GitCommit:";
const DIRECTORY_FIELD: &str = "Directory:";

/// Fields of one blank-line separated manifest block.
#[derive(Debug, Default)]
struct Block<'a> {
    tags: Vec<&'a str>,
    git_commit: Option<&'a str>,
    directory: Option<&'a str>,
}

impl<'a> Block<'a> {
    fn parse(text: &'a str) -> Self {
        let mut block = Block::default();
        for line in text.lines().map(str::trim) {
            if let Some(tags) = line.strip_prefix(TAGS_FIELD) {
                block.tags = tags
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect();
            } else if let Some(commit) = line.strip_prefix(GIT_COMMIT_FIELD) {
                block.git_commit = Some(commit.trim()).filter(|c| !c.is_empty());
            } else if let Some(directory) = line.strip_prefix(DIRECTORY_FIELD) {
                block.directory = Some(directory.trim());
            }
        }
        block
    }

    fn has_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.iter().any(|tag| tag == t))
    }
}

/// Text of a previously published manifest.
#[derive(Debug, Clone, Default)]
pub struct PreviousManifest {
    text: String,
}

impl PreviousManifest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().replace("\r\n", "\n"),
        }
    }

    /// A manifest with no entries; every image is treated as new.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Download the manifest. Any HTTP error status is fatal.
    pub async fn fetch(url: &str) -> ManifestResult<Self> {
        info!("Fetching previous manifest from {}", url);

        let response = reqwest::get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ManifestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!("Previous manifest is {} bytes", text.len());
        Ok(Self::new(text))
    }

    /// Read a local copy of the manifest.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        info!("Reading previous manifest from {}", path.display());
        Ok(Self::new(fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any of `tags` occurs anywhere in the manifest text.
    pub fn mentions_any(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.text.contains(tag.as_str()))
    }

    /// `GitCommit` of the published entry for `directory`.
    ///
    /// The entry is the block whose `Directory` is `directory`, or failing
    /// that the first block listing one of `tags` as a whole tag. Returns
    /// `None` when there is no such entry or it has no `GitCommit` line.
    pub fn published_commit(&self, tags: &[String], directory: &str) -> Option<&str> {
        let blocks: Vec<Block<'_>> = self.text.split("\n\n").map(Block::parse).collect();

        blocks
            .iter()
            .find(|block| block.directory == Some(directory))
            .or_else(|| blocks.iter().find(|block| block.has_tag(tags)))
            .and_then(|block| block.git_commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLISHED: &str = "\
# Eclipse Temurin OpenJDK images provided by the Eclipse Foundation.

Maintainers: George Adams <george.adams@microsoft.com> (@gdams)
GitRepo: https://github.com/adoptium/containers.git

#------------------------------v8 images---------------------------------

Tags: 8u432-b06-jdk-noble, 8-jdk-noble, 8-noble
SharedTags: 8u432-b06-jdk, 8-jdk, 8
Architectures: amd64, arm32v7, arm64v8, ppc64le, s390x
GitCommit: 1111111111111111111111111111111111111111
Directory: 8/jdk/ubuntu/noble

Tags: 11.0.25_9-jdk-noble, 11-jdk-noble, 11-noble
Architectures: amd64, arm64v8
GitCommit: 2222222222222222222222222222222222222222
Directory: 11/jdk/ubuntu/noble

Tags: 17.0.13_11-jdk-jammy
Directory: 17/jdk/ubuntu/jammy
";

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_commit_taken_from_matching_block() {
        let previous = PreviousManifest::new(PUBLISHED);
        assert_eq!(
            previous.published_commit(&tags(&["11-jdk-noble"]), "11/jdk/ubuntu/noble"),
            Some("2222222222222222222222222222222222222222")
        );
        assert_eq!(
            previous.published_commit(&tags(&["8-jdk-noble"]), "8/jdk/ubuntu/noble"),
            Some("1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn test_block_without_commit() {
        let previous = PreviousManifest::new(PUBLISHED);
        assert!(previous.mentions_any(&tags(&["17-jdk-jammy"])));
        assert_eq!(
            previous.published_commit(&tags(&["17-jdk-jammy"]), "17/jdk/ubuntu/jammy"),
            None
        );
    }

    #[test]
    fn test_unknown_tags() {
        let previous = PreviousManifest::new(PUBLISHED);
        let unknown = tags(&["25-jdk-noble"]);
        assert!(!previous.mentions_any(&unknown));
        assert_eq!(previous.published_commit(&unknown, "25/jdk/ubuntu/noble"), None);
        assert!(!PreviousManifest::empty().mentions_any(&unknown));
    }

    #[test]
    fn test_windows_line_endings_are_normalised() {
        let previous = PreviousManifest::new(PUBLISHED.replace('\n', "\r\n"));
        assert_eq!(
            previous.published_commit(&tags(&["11-noble"]), "11/jdk/ubuntu/noble"),
            Some("2222222222222222222222222222222222222222")
        );
    }

    const OVERLAPPING: &str = "\
Tags: 11.0.25_9-jdk-alpine-3.21, 11-jdk-alpine-3.21, 11-alpine-3.21
GitCommit: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa
Directory: 11/jdk/alpine/3.21

Tags: 11.0.25_9-jdk-alpine-3.22, 11-jdk-alpine-3.22, 11-alpine-3.22, 11.0.25_9-jdk-alpine, 11-jdk-alpine, 11-alpine
GitCommit: bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb
Directory: 11/jdk/alpine/3.22

Tags: 18-jdk-noble
GitCommit: cccccccccccccccccccccccccccccccccccccccc
Directory: 18/jdk/ubuntu/noble

Tags: 8-jdk-noble
GitCommit: dddddddddddddddddddddddddddddddddddddddd
Directory: 8/jdk/ubuntu/noble
";

    #[test]
    fn test_default_alpine_not_matched_by_versioned_alpine_block() {
        let previous = PreviousManifest::new(OVERLAPPING);
        let default_alpine = tags(&[
            "11.0.25_9-jdk-alpine-3.22",
            "11-jdk-alpine-3.22",
            "11-alpine-3.22",
            "11.0.25_9-jdk-alpine",
            "11-jdk-alpine",
            "11-alpine",
        ]);

        assert_eq!(
            previous.published_commit(&default_alpine, "11/jdk/alpine/3.22"),
            Some("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb")
        );
    }

    #[test]
    fn test_tags_match_whole_tokens_when_directory_moved() {
        let previous = PreviousManifest::new(OVERLAPPING);

        // `8-jdk-noble` is a substring of `18-jdk-noble` but only a whole tag
        // of the v8 block.
        assert_eq!(
            previous.published_commit(&tags(&["8-jdk-noble"]), "8/jdk/ubuntu/noble-new"),
            Some("dddddddddddddddddddddddddddddddddddddddd")
        );
        assert_eq!(
            previous.published_commit(&tags(&["11-jdk-alpine"]), "elsewhere/11/jdk/alpine/3.22"),
            Some("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb")
        );
    }
}
