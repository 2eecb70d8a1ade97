//! Data models for the image configuration.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, ConfigResult};

/// OS family name used for Windows images.
pub const WINDOWS_FAMILY: &str = "windows";

/// OS family name used for Alpine Linux images.
pub const ALPINE_FAMILY: &str = "alpine-linux";

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemurinConfig {
    pub metadata: Metadata,
    pub supported_distributions: SupportedDistributions,
    pub configurations: OsFamilies,
}

impl TemurinConfig {
    /// Parse a configuration document from YAML text and validate it.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: TemurinConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Globally supported versions, in configured order.
    pub fn versions(&self) -> &[u32] {
        &self.supported_distributions.versions
    }

    /// Iterate every configuration entry together with its OS family, in
    /// document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigEntry)> {
        self.configurations
            .iter()
            .flat_map(|(family, entries)| entries.iter().map(move |e| (family, e)))
    }

    /// Check structural invariants the pipelines rely on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.supported_distributions.versions.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "supported_distributions.Versions must not be empty".to_string(),
            ));
        }

        if self.metadata.image_types.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "metadata.image_types must not be empty".to_string(),
            ));
        }

        for (family, entries) in self.configurations.iter() {
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.directory.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed(format!(
                        "empty directory in OS family {}",
                        family
                    )));
                }
                if !seen.insert(entry.directory.as_str()) {
                    return Err(ConfigError::ValidationFailed(format!(
                        "duplicate directory {} in OS family {}",
                        entry.directory, family
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Global metadata shared by both pipelines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// The single version that receives the `latest` tag.
    pub latest_version: u32,
    #[serde(default = "default_image_types")]
    pub image_types: Vec<String>,
    /// Distro whose images carry the distro-less shared tags on Linux.
    pub default_linux_image: String,
    /// Alpine distro whose images also carry the plain `alpine` tags.
    pub default_alpine_image: String,
    #[serde(default)]
    pub manifest: ManifestHeader,
}

fn default_image_types() -> Vec<String> {
    vec!["jdk".to_string(), "jre".to_string()]
}

/// Header fields written at the top of the generated manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestHeader {
    pub title: String,
    pub maintainers: Vec<String>,
    pub git_repo: String,
    pub git_fetch: String,
    pub builder: String,
}

impl Default for ManifestHeader {
    fn default() -> Self {
        Self {
            title: "Eclipse Temurin OpenJDK images provided by the Eclipse Foundation.".to_string(),
            maintainers: vec![
                "George Adams <george.adams@microsoft.com> (@gdams)".to_string(),
                "Stewart Addison <sxa@redhat.com> (@sxa)".to_string(),
            ],
            git_repo: "https://github.com/adoptium/containers.git".to_string(),
            git_fetch: "refs/heads/main".to_string(),
            builder: "buildkit".to_string(),
        }
    }
}

/// Supported version list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportedDistributions {
    #[serde(rename = "Versions")]
    pub versions: Vec<u32>,
    #[serde(rename = "OS", default, skip_serializing_if = "Vec::is_empty")]
    pub os: Vec<String>,
}

/// One distro directory within an OS family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigEntry {
    /// Path segment below `{version}/{image_type}/`, e.g. `ubuntu/noble`.
    pub directory: String,
    /// Release API architecture names, e.g. `x64`, `aarch64`.
    #[serde(default)]
    pub architectures: Vec<String>,
    /// Template selector, e.g. `ubuntu` or `nanoserver`.
    pub os: String,
    /// Base image reference.
    pub image: String,
    /// Versions at or above this threshold are no longer generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<u32>>,
}

impl ConfigEntry {
    /// Versions to generate for this entry: the explicit list, or the global
    /// list, minus deprecated versions.
    pub fn active_versions(&self, config: &TemurinConfig) -> Vec<u32> {
        self.versions
            .as_deref()
            .unwrap_or(config.versions())
            .iter()
            .copied()
            .filter(|v| !self.is_deprecated_for(*v))
            .collect()
    }

    pub fn is_deprecated_for(&self, version: u32) -> bool {
        matches!(self.deprecated, Some(threshold) if version >= threshold)
    }

    /// Tag part of the base image reference (`ltsc2022` for
    /// `mcr.microsoft.com/windows/servercore:ltsc2022`).
    pub fn base_image_tag(&self) -> Option<&str> {
        self.image.split(':').nth(1)
    }
}

/// OS family to configuration entries, keeping document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsFamilies(Vec<(String, Vec<ConfigEntry>)>);

impl OsFamilies {
    pub fn new(families: Vec<(String, Vec<ConfigEntry>)>) -> Self {
        Self(families)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ConfigEntry])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn get(&self, family: &str) -> Option<&[ConfigEntry]> {
        self.0
            .iter()
            .find(|(k, _)| k == family)
            .map(|(_, v)| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for OsFamilies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (family, entries) in &self.0 {
            map.serialize_entry(family, entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OsFamilies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OsFamiliesVisitor;

        impl<'de> Visitor<'de> for OsFamiliesVisitor {
            type Value = OsFamilies;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of OS family to configuration entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut families = Vec::new();
                while let Some((family, entries)) =
                    access.next_entry::<String, Vec<ConfigEntry>>()?
                {
                    families.push((family, entries));
                }
                Ok(OsFamilies(families))
            }
        }

        deserializer.deserialize_map(OsFamiliesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
metadata:
  latest_version: 25
  image_types: [jdk, jre]
  default_linux_image: noble
  default_alpine_image: alpine-3.21
supported_distributions:
  Versions: [8, 11, 17, 21, 25]
configurations:
  windows:
    - directory: windows/nanoserver-ltsc2022
      architectures: [x64]
      os: nanoserver
      image: mcr.microsoft.com/windows/nanoserver:ltsc2022
  linux:
    - directory: ubuntu/jammy
      architectures: [x64, aarch64]
      os: ubuntu
      image: ubuntu:22.04
      deprecated: 21
    - directory: ubuntu/focal
      architectures: [x64]
      os: ubuntu
      image: ubuntu:20.04
      versions: [8, 11]
"#;

    #[test]
    fn test_families_keep_document_order() {
        let config = TemurinConfig::from_yaml(SAMPLE).unwrap();
        let families: Vec<_> = config.configurations.iter().map(|(f, _)| f).collect();
        assert_eq!(families, vec!["windows", "linux"]);
    }

    #[test]
    fn test_active_versions() {
        let config = TemurinConfig::from_yaml(SAMPLE).unwrap();
        let linux = config.configurations.get("linux").unwrap();

        assert_eq!(linux[0].active_versions(&config), vec![8, 11, 17]);
        assert_eq!(linux[1].active_versions(&config), vec![8, 11]);
    }

    #[test]
    fn test_default_header_and_image_types() {
        let config = TemurinConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.metadata.manifest.builder, "buildkit");
        assert_eq!(config.metadata.image_types, vec!["jdk", "jre"]);
    }

    #[test]
    fn test_base_image_tag() {
        let config = TemurinConfig::from_yaml(SAMPLE).unwrap();
        let windows = config.configurations.get("windows").unwrap();
        assert_eq!(windows[0].base_image_tag(), Some("ltsc2022"));
    }

    #[test]
    fn test_duplicate_directory_rejected() {
        let yaml = SAMPLE.replace("ubuntu/focal", "ubuntu/jammy");
        let err = TemurinConfig::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed(_)));
    }
}
