//! Manifest assembly and commit reconciliation.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use temurin_config::{ManifestHeader, TemurinConfig, ALPINE_FAMILY, WINDOWS_FAMILY};

use crate::dockerfile::DockerfileParser;
use crate::entry::{ManifestEntry, WindowsFields};
use crate::error::ManifestResult;
use crate::history::SourceHistory;
use crate::previous::PreviousManifest;
use crate::tags::{full_version, generate_shared_tags, generate_tags, TagPolicy};
use crate::walker::find_dockerfiles;

/// Builds the official-images manifest from the Dockerfiles below `root`.
///
/// `root` must be the top of the git work tree: entry directories are used
/// both as filesystem paths below `root` and as `commit:path` git paths.
pub struct ManifestGenerator<'a, H: SourceHistory> {
    config: &'a TemurinConfig,
    history: &'a H,
    previous: &'a PreviousManifest,
    root: PathBuf,
    parser: DockerfileParser,
    policy: TagPolicy,
}

impl<'a, H: SourceHistory> ManifestGenerator<'a, H> {
    pub fn new(
        config: &'a TemurinConfig,
        history: &'a H,
        previous: &'a PreviousManifest,
        root: impl Into<PathBuf>,
    ) -> ManifestResult<Self> {
        Ok(Self {
            config,
            history,
            previous,
            root: root.into(),
            parser: DockerfileParser::new()?,
            policy: TagPolicy::from(&config.metadata),
        })
    }

    /// Render the complete manifest document.
    pub fn generate(&self) -> ManifestResult<String> {
        let current = self.history.head_commit()?;
        info!("Current commit is {}", current);

        let mut document = String::new();
        write_header(&self.config.metadata.manifest, &mut document);

        let mut entries = 0;
        for &version in self.config.versions() {
            document.push_str(&format!(
                "\n#------------------------------v{} images---------------------------------\n",
                version
            ));

            for pkg in &self.config.metadata.image_types {
                for (os_family, config_entry) in self.config.entries() {
                    let dirs =
                        find_dockerfiles(&self.root, version, pkg, &config_entry.directory)?;
                    for dir in dirs {
                        let entry = self.entry(&current, version, pkg, os_family, &dir)?;
                        document.push_str(&entry.to_string());
                        entries += 1;
                    }
                }
            }
        }

        info!("Generated {} manifest entries", entries);
        Ok(document)
    }

    /// Generate the manifest and atomically replace `path` with it.
    pub fn write(&self, path: &Path) -> ManifestResult<()> {
        let document = self.generate()?;
        write_manifest(path, &document)?;
        info!("Wrote manifest to {}", path.display());
        Ok(())
    }

    /// Build the entry for the Dockerfile in `dir`.
    pub fn entry(
        &self,
        current: &str,
        version: u32,
        pkg: &str,
        os_family: &str,
        dir: &str,
    ) -> ManifestResult<ManifestEntry> {
        let last = dir.rsplit('/').next().unwrap_or(dir);
        let distro = if os_family == ALPINE_FAMILY {
            format!("alpine-{}", last)
        } else {
            last.to_string()
        };

        let metadata = self.parser.parse_dir(&self.root.join(dir), os_family)?;
        let java_version = full_version(&metadata.java_version);

        let tags = generate_tags(&java_version, version, pkg, &distro, &self.policy);
        let shared_tags =
            generate_shared_tags(&java_version, version, pkg, &distro, os_family, &self.policy);
        let git_commit = self.resolve_commit(current, &tags, dir)?;

        let windows = (os_family == WINDOWS_FAMILY).then(|| WindowsFields::for_distro(&distro));

        Ok(ManifestEntry {
            tags,
            shared_tags,
            architectures: metadata.architectures,
            git_commit,
            directory: dir.to_string(),
            windows,
        })
    }

    /// Keep the published commit unless the image sources changed since.
    fn resolve_commit(
        &self,
        current: &str,
        tags: &[String],
        dir: &str,
    ) -> ManifestResult<String> {
        if !self.previous.mentions_any(tags) {
            debug!("{} is a new entry", dir);
            return Ok(current.to_string());
        }

        let Some(published) = self.previous.published_commit(tags, dir) else {
            debug!("{} has no published commit", dir);
            return Ok(current.to_string());
        };

        let mut files = vec![format!("{}/Dockerfile", dir)];
        if self.root.join(dir).join("entrypoint.sh").exists() {
            files.push(format!("{}/entrypoint.sh", dir));
        }

        for file in &files {
            if !self.history.compare_file(current, published, file)?.is_identical() {
                debug!("{} changed since {}", file, published);
                return Ok(current.to_string());
            }
        }

        Ok(published.to_string())
    }
}

/// Append the manifest header.
pub fn write_header(header: &ManifestHeader, out: &mut String) {
    const MAINTAINERS: &str = "Maintainers: ";

    let indent = format!(",\n{}", " ".repeat(MAINTAINERS.len()));
    out.push_str(&format!("# {}\n\n", header.title));
    out.push_str(&format!("{}{}\n", MAINTAINERS, header.maintainers.join(&indent)));
    out.push_str(&format!("GitRepo: {}\n", header.git_repo));
    out.push_str(&format!("GitFetch: {}\n", header.git_fetch));
    out.push_str(&format!("Builder: {}\n", header.builder));
}

/// Write `content` to `path` through a temporary file in the same directory.
pub fn write_manifest(path: &Path, content: &str) -> ManifestResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
