//! # temurin_release
//!
//! Client for the Adoptium release API.
//!
//! Looks up the latest GA release for a (version, image type, OS family)
//! tuple and turns its binaries into the per-architecture download data the
//! Dockerfile templates consume.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod select;

pub use cache::ReleaseCache;
pub use client::{AdoptiumClient, ReleaseSource, DEFAULT_API_URL};
pub use error::{ReleaseError, ReleaseResult};
pub use models::{ArchBinary, ArchData, Asset, Binary, Release, VersionData, WindowsInstaller};
pub use select::{arch_helper, openjdk_version, select_arch_data, windows_copy_from, Selection};
