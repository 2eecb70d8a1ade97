//! Extracting manifest metadata from generated Dockerfiles.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use temurin_config::WINDOWS_FAMILY;

use crate::error::ManifestResult;

/// The only architecture Windows images are published for.
pub const WINDOWS_ARCHITECTURE: &str = "windows-amd64";

const CASE_START: &str = r#"case "${ARCH}" in"#;

/// Java version and architectures declared by a Dockerfile.
///
/// Both fields are empty when the Dockerfile lacks the corresponding
/// declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerfileMetadata {
    pub java_version: String,
    pub architectures: Vec<String>,
}

/// Parser for the `ENV JAVA_VERSION=` line and the `case "${ARCH}" in`
/// block of a generated Dockerfile.
pub struct DockerfileParser {
    java_version: Regex,
    case_label: Regex,
}

impl DockerfileParser {
    pub fn new() -> ManifestResult<Self> {
        Ok(Self {
            java_version: Regex::new(r"JAVA_VERSION=([\w+.\-]+)")?,
            case_label: Regex::new(r"^\s*(\w+)\)")?,
        })
    }

    /// Parse `{dir}/Dockerfile`.
    pub fn parse_dir(&self, dir: &Path, os_family: &str) -> ManifestResult<DockerfileMetadata> {
        let path = dir.join("Dockerfile");
        debug!("Parsing {:?}", path);
        let content = fs::read_to_string(&path)?;
        Ok(self.parse(&content, os_family))
    }

    pub fn parse(&self, content: &str, os_family: &str) -> DockerfileMetadata {
        let java_version = content
            .lines()
            .find(|line| line.contains("ENV JAVA_VERSION="))
            .and_then(|line| self.java_version.captures(line))
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        if os_family == WINDOWS_FAMILY {
            return DockerfileMetadata {
                java_version,
                architectures: vec![WINDOWS_ARCHITECTURE.to_string()],
            };
        }

        let mut architectures = Vec::new();
        let mut lines = content
            .lines()
            .skip_while(|line| !line.trim().starts_with(CASE_START));

        if lines.next().is_some() {
            for line in lines {
                let trimmed = line.trim();
                if trimmed.starts_with("*)") {
                    break;
                }
                if let Some(caps) = self.case_label.captures(line) {
                    architectures.push(docker_architecture(&caps[1]).to_string());
                }
            }
        }

        architectures.sort();

        DockerfileMetadata {
            java_version,
            architectures,
        }
    }
}

/// Map a `case` label onto the official-images architecture name.
fn docker_architecture(label: &str) -> &str {
    match label {
        "x86_64" => "amd64",
        "armhf" => "arm32v7",
        "arm64" | "aarch64" => "arm64v8",
        "ppc64el" => "ppc64le",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCKERFILE: &str = r#"
        ENV JAVA_VERSION=jdk-11.0.16+8
        case "${ARCH}" in
            x86_64)
                echo "amd64 selected"
            ;;
            arm64)
                echo "arm64v8 selected"
            ;;
        esac
        "#;

    #[test]
    fn test_parse_dockerfile() {
        let parser = DockerfileParser::new().unwrap();
        let meta = parser.parse(DOCKERFILE, "linux");

        assert_eq!(meta.java_version, "jdk-11.0.16+8");
        assert_eq!(meta.architectures, vec!["amd64", "arm64v8"]);
    }

    #[test]
    fn test_windows_architecture_is_fixed() {
        let parser = DockerfileParser::new().unwrap();
        let meta = parser.parse(DOCKERFILE, "windows");

        assert_eq!(meta.java_version, "jdk-11.0.16+8");
        assert_eq!(meta.architectures, vec![WINDOWS_ARCHITECTURE]);
    }

    #[test]
    fn test_labels_mapped_sorted_and_stop_at_wildcard() {
        let content = r#"ENV JAVA_VERSION=jdk8u432-b06
RUN set -eux; \
    ARCH="$(dpkg --print-architecture)"; \
    case "${ARCH}" in \
       ppc64el) \
         ESUM='a'; \
         ;; \
       s390x) \
         ESUM='b'; \
         ;; \
       armhf) \
         ESUM='c'; \
         ;; \
       amd64) \
         ESUM='d'; \
         ;; \
       *) \
         echo "Unsupported arch: ${ARCH}"; \
         ;; \
    esac; \
    other) \
"#;
        let parser = DockerfileParser::new().unwrap();
        let meta = parser.parse(content, "linux");

        assert_eq!(meta.java_version, "jdk8u432-b06");
        assert_eq!(meta.architectures, vec!["amd64", "arm32v7", "ppc64le", "s390x"]);
    }

    #[test]
    fn test_missing_declarations_yield_defaults() {
        let parser = DockerfileParser::new().unwrap();
        let meta = parser.parse("FROM scratch\n", "alpine-linux");
        assert_eq!(meta, DockerfileMetadata::default());
    }

    #[test]
    fn test_first_version_line_wins() {
        let parser = DockerfileParser::new().unwrap();
        let meta = parser.parse(
            "ENV JAVA_VERSION=jdk-21.0.5+11\nENV JAVA_VERSION=jdk-17.0.1+12\n",
            "linux",
        );
        assert_eq!(meta.java_version, "jdk-21.0.5+11");
    }
}
