//! One published image block of the manifest.

use std::fmt;

/// Builder used by Windows images.
const WINDOWS_BUILDER: &str = "classic";

/// Extra fields carried by Windows entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsFields {
    pub builder: String,
    pub constraints: String,
}

impl WindowsFields {
    /// Fields for a Windows distro such as `nanoserver-ltsc2022`.
    ///
    /// Nano Server images also require the matching Server Core host.
    pub fn for_distro(distro: &str) -> Self {
        let constraints = if distro.contains("nanoserver") {
            format!("{}, windowsservercore{}", distro, distro.replace("nanoserver", ""))
        } else {
            distro.to_string()
        };

        Self {
            builder: WINDOWS_BUILDER.to_string(),
            constraints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub tags: Vec<String>,
    pub shared_tags: Vec<String>,
    pub architectures: Vec<String>,
    pub git_commit: String,
    pub directory: String,
    pub windows: Option<WindowsFields>,
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tags: {}", self.tags.join(", "))?;
        if !self.shared_tags.is_empty() {
            writeln!(f, "SharedTags: {}", self.shared_tags.join(", "))?;
        }
        writeln!(f, "Architectures: {}", self.architectures.join(", "))?;
        writeln!(f, "GitCommit: {}", self.git_commit)?;
        writeln!(f, "Directory: {}", self.directory)?;
        if let Some(windows) = &self.windows {
            writeln!(f, "Builder: {}", windows.builder)?;
            writeln!(f, "Constraints: {}", windows.constraints)?;
        }
        writeln!(f)
    }
}
