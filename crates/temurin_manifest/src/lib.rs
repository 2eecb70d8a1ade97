//! # temurin_manifest
//!
//! Generates the docker-library official-images manifest for Eclipse Temurin.
//!
//! The manifest lists, for every generated Dockerfile, its tags, shared tags,
//! architectures and the git commit the image is built from. Entries whose
//! Dockerfile (and entrypoint) did not change since the previously published
//! manifest keep their published commit, so unchanged images are not rebuilt.
//!
//! # Architecture
//!
//! - **Walker**: finds `{version}/{type}/{directory}/Dockerfile` on disk
//! - **Parser**: reads `JAVA_VERSION` and the architecture `case` block
//! - **Tags**: canonical and shared tag sets
//! - **History**: git access for the current commit and blob diffs
//! - **Generator**: commit reconciliation and document assembly
//!
//! # Example
//!
//! ```rust,no_run
//! use temurin_config::TemurinConfig;
//! use temurin_manifest::{GitHistory, ManifestGenerator, PreviousManifest};
//!
//! # fn run(previous: PreviousManifest) -> Result<(), Box<dyn std::error::Error>> {
//! let config = TemurinConfig::load("config/temurin.yml")?;
//! let history = GitHistory::new(".");
//! let generator = ManifestGenerator::new(&config, &history, &previous, ".")?;
//! generator.write("eclipse-temurin".as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod dockerfile;
pub mod entry;
pub mod error;
pub mod generator;
pub mod history;
pub mod previous;
pub mod tags;
pub mod walker;

pub use dockerfile::{DockerfileMetadata, DockerfileParser, WINDOWS_ARCHITECTURE};
pub use entry::{ManifestEntry, WindowsFields};
pub use error::{ManifestError, ManifestResult};
pub use generator::{write_header, write_manifest, ManifestGenerator};
pub use history::{BlobComparison, GitHistory, SourceHistory};
pub use previous::{PreviousManifest, OFFICIAL_MANIFEST_URL};
pub use tags::{full_version, generate_shared_tags, generate_tags, TagPolicy, JDK};
pub use walker::find_dockerfiles;
