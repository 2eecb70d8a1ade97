//! Release API payloads and the template-facing architecture data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A release returned by the `feature_releases` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    pub release_name: String,
    pub version_data: VersionData,
    #[serde(default)]
    pub binaries: Vec<Binary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionData {
    pub openjdk_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semver: Option<String>,
}

/// One downloadable build within a release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Binary {
    pub architecture: String,
    pub os: String,
    #[serde(default)]
    pub image_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer: Option<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub link: String,
    pub checksum: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Download data for one architecture.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArchBinary {
    pub download_url: String,
    pub checksum: String,
}

/// The Windows installer plus the servercore image nanoserver copies from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WindowsInstaller {
    pub download_url: String,
    pub checksum: String,
    pub copy_from: String,
}

/// Architecture data handed to the Dockerfile templates as `arch_data`.
///
/// Linux families get a map keyed by the template architecture name, sorted
/// by key. Windows gets the single installer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ArchData {
    Linux(BTreeMap<String, ArchBinary>),
    Windows(WindowsInstaller),
}

impl ArchData {
    pub fn is_empty(&self) -> bool {
        match self {
            ArchData::Linux(map) => map.is_empty(),
            ArchData::Windows(_) => false,
        }
    }

    /// Architecture names in template order; Windows reports none.
    pub fn architectures(&self) -> Vec<&str> {
        match self {
            ArchData::Linux(map) => map.keys().map(String::as_str).collect(),
            ArchData::Windows(_) => Vec::new(),
        }
    }
}
