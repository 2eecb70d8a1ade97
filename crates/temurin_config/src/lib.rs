//! # temurin_config
//!
//! Declarative configuration for the Eclipse Temurin image family.
//!
//! The configuration names the supported JDK versions, the image types to
//! build, the default distros used for floating tags, and the per-OS-family
//! list of distro directories with their base images and architectures.
//!
//! ## Example
//!
//! ```rust,no_run
//! use temurin_config::TemurinConfig;
//!
//! let config = TemurinConfig::load("config/temurin.yml").unwrap();
//! for (os_family, entry) in config.entries() {
//!     println!("{os_family}: {} -> {:?}", entry.directory, entry.active_versions(&config));
//! }
//! ```

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use models::{
    ConfigEntry, ManifestHeader, Metadata, OsFamilies, SupportedDistributions, TemurinConfig,
    WINDOWS_FAMILY, ALPINE_FAMILY,
};
