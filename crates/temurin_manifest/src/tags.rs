//! Tag and shared-tag generation.

use temurin_config::{Metadata, WINDOWS_FAMILY};

/// Package type that also receives the package-less tags.
pub const JDK: &str = "jdk";

/// Defaults that decide which distros carry the short tag aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPolicy {
    pub latest_version: u32,
    pub default_linux_image: String,
    pub default_alpine_image: String,
}

impl From<&Metadata> for TagPolicy {
    fn from(metadata: &Metadata) -> Self {
        Self {
            latest_version: metadata.latest_version,
            default_linux_image: metadata.default_linux_image.clone(),
            default_alpine_image: metadata.default_alpine_image.clone(),
        }
    }
}

/// Turn a `JAVA_VERSION` value into the version used in tags:
/// `jdk-11.0.16+8` becomes `11.0.16_8`, `jdk8u432-b06` becomes `8u432-b06`.
pub fn full_version(java_version: &str) -> String {
    java_version
        .replace('+', "_")
        .replace("jdk-", "")
        .replace("jdk", "")
}

/// Distro-qualified tags for one image, in publication order.
pub fn generate_tags(
    java_version: &str,
    version: u32,
    pkg: &str,
    distro: &str,
    policy: &TagPolicy,
) -> Vec<String> {
    let mut tags = Vec::new();
    push_qualified(&mut tags, java_version, version, pkg, distro);

    if distro == policy.default_alpine_image {
        push_qualified(&mut tags, java_version, version, pkg, "alpine");
    }

    tags
}

/// Tags shared between images of several platforms.
pub fn generate_shared_tags(
    java_version: &str,
    version: u32,
    pkg: &str,
    distro: &str,
    os_family: &str,
    policy: &TagPolicy,
) -> Vec<String> {
    let mut tags = Vec::new();
    let windows = os_family == WINDOWS_FAMILY;

    if windows {
        let variant = if distro.starts_with("nanoserver") {
            "nanoserver"
        } else {
            "windowsservercore"
        };
        push_qualified(&mut tags, java_version, version, pkg, variant);
    }

    let default_image = if windows {
        distro.starts_with("windowsservercore")
    } else {
        distro == policy.default_linux_image
    };
    if default_image {
        tags.push(format!("{}-{}", java_version, pkg));
        tags.push(format!("{}-{}", version, pkg));
        if pkg == JDK {
            tags.push(version.to_string());
            if version == policy.latest_version {
                tags.push("latest".to_string());
            }
        }
    }

    tags
}

fn push_qualified(
    tags: &mut Vec<String>,
    java_version: &str,
    version: u32,
    pkg: &str,
    qualifier: &str,
) {
    tags.push(format!("{}-{}-{}", java_version, pkg, qualifier));
    tags.push(format!("{}-{}-{}", version, pkg, qualifier));
    if pkg == JDK {
        tags.push(format!("{}-{}", version, qualifier));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TagPolicy {
        TagPolicy {
            latest_version: 25,
            default_linux_image: "noble".to_string(),
            default_alpine_image: "alpine-3.21".to_string(),
        }
    }

    #[test]
    fn test_full_version() {
        assert_eq!(full_version("jdk-11.0.16+8"), "11.0.16_8");
        assert_eq!(full_version("jdk8u432-b06"), "8u432-b06");
        assert_eq!(full_version(""), "");
    }

    #[test]
    fn test_generate_tags_default_alpine() {
        let tags = generate_tags("11.0.16_8", 11, "jdk", "alpine-3.21", &policy());
        assert_eq!(
            tags,
            vec![
                "11.0.16_8-jdk-alpine-3.21",
                "11-jdk-alpine-3.21",
                "11-alpine-3.21",
                "11.0.16_8-jdk-alpine",
                "11-jdk-alpine",
                "11-alpine",
            ]
        );
    }

    #[test]
    fn test_generate_tags_jre_skips_package_less_tag() {
        let tags = generate_tags("21.0.5_11", 21, "jre", "jammy", &policy());
        assert_eq!(tags, vec!["21.0.5_11-jre-jammy", "21-jre-jammy"]);
    }

    #[test]
    fn test_generate_shared_tags_default_linux() {
        let tags = generate_shared_tags("11.0.16_8", 11, "jdk", "noble", "linux", &policy());
        assert_eq!(tags, vec!["11.0.16_8-jdk", "11-jdk", "11"]);
    }

    #[test]
    fn test_latest_only_for_latest_version() {
        let tags = generate_shared_tags("25_36", 25, "jdk", "noble", "linux", &policy());
        assert_eq!(tags, vec!["25_36-jdk", "25-jdk", "25", "latest"]);

        let tags = generate_shared_tags("25_36", 25, "jre", "noble", "linux", &policy());
        assert_eq!(tags, vec!["25_36-jre", "25-jre"]);
    }

    #[test]
    fn test_non_default_linux_has_no_shared_tags() {
        let tags = generate_shared_tags("11.0.16_8", 11, "jdk", "jammy", "linux", &policy());
        assert!(tags.is_empty());
    }

    #[test]
    fn test_windows_shared_tags() {
        let tags = generate_shared_tags(
            "17.0.13_11",
            17,
            "jdk",
            "nanoserver-ltsc2022",
            "windows",
            &policy(),
        );
        assert_eq!(
            tags,
            vec!["17.0.13_11-jdk-nanoserver", "17-jdk-nanoserver", "17-nanoserver"]
        );

        let tags = generate_shared_tags(
            "17.0.13_11",
            17,
            "jre",
            "windowsservercore-ltsc2022",
            "windows",
            &policy(),
        );
        assert_eq!(
            tags,
            vec![
                "17.0.13_11-jre-windowsservercore",
                "17-jre-windowsservercore",
                "17.0.13_11-jre",
                "17-jre",
            ]
        );
    }
}
