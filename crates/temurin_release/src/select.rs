//! Mapping release binaries onto template architecture data.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{ArchBinary, ArchData, Release, WindowsInstaller};

/// Translate a release API architecture into the name the `os` template
/// switches on.
pub fn arch_helper(arch: &str, os: &str) -> String {
    match (arch, os) {
        ("aarch64", "ubuntu") => "arm64".to_string(),
        ("ppc64le", "ubuntu") => "ppc64el".to_string(),
        ("arm", _) => "armhf".to_string(),
        ("x64", "ubuntu") => "amd64".to_string(),
        ("x64", _) => "x86_64".to_string(),
        _ => arch.to_string(),
    }
}

/// The `JAVA_VERSION` value for a release: the release name for Java 8,
/// `jdk-{openjdk_version}` without the `-LTS` marker otherwise.
pub fn openjdk_version(release: &Release, version: u32) -> String {
    if version == 8 {
        return release.release_name.clone();
    }
    format!("jdk-{}", release.version_data.openjdk_version).replace("-LTS", "")
}

/// Name of the servercore image a nanoserver image copies its JDK from,
/// e.g. `11.0.11_9-jdk-windowsservercore-ltsc2022`.
pub fn windows_copy_from(
    java_version: &str,
    version: u32,
    image_type: &str,
    base_image_tag: &str,
) -> String {
    let mut copy_from = java_version.replace("jdk", "");
    if version != 8 {
        copy_from = copy_from.replace('-', "").replace('+', "_");
    }
    format!("{copy_from}-{image_type}-windowsservercore-{base_image_tag}")
}

/// Inputs that decide which binaries of a release a Dockerfile uses.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub architectures: &'a [String],
    pub os_family: &'a str,
    pub os: &'a str,
    pub image_type: &'a str,
    pub java_version: &'a str,
    pub version: u32,
    /// Tag of the base image, used in the Windows `COPY --from` reference.
    pub base_image_tag: &'a str,
}

/// Pick the binaries matching the configured architectures and OS family.
///
/// Returns `None` when nothing matched, in which case the Dockerfile is left
/// untouched.
pub fn select_arch_data(release: &Release, selection: &Selection<'_>) -> Option<ArchData> {
    let mut linux = BTreeMap::new();
    let mut windows = None;

    for binary in &release.binaries {
        if binary.os != selection.os_family
            || !selection.architectures.iter().any(|a| *a == binary.architecture)
        {
            continue;
        }

        if selection.os_family == "windows" {
            let Some(installer) = &binary.installer else {
                debug!("No installer for {} {}", binary.os, binary.architecture);
                continue;
            };
            windows = Some(WindowsInstaller {
                download_url: installer.link.clone(),
                checksum: installer.checksum.clone(),
                copy_from: windows_copy_from(
                    selection.java_version,
                    selection.version,
                    selection.image_type,
                    selection.base_image_tag,
                ),
            });
        } else {
            let Some(package) = &binary.package else {
                debug!("No package for {} {}", binary.os, binary.architecture);
                continue;
            };
            linux.insert(
                arch_helper(&binary.architecture, selection.os),
                ArchBinary {
                    download_url: package.link.clone(),
                    checksum: package.checksum.clone(),
                },
            );
        }
    }

    match windows {
        Some(installer) => Some(ArchData::Windows(installer)),
        None if linux.is_empty() => None,
        None => Some(ArchData::Linux(linux)),
    }
}
