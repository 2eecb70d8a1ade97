//! CLI command definitions.
//!
//! Each subcommand maps to one of the two pipelines: regenerating the
//! Dockerfile tree and writing the official-images manifest.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod dockerfiles;
pub mod manifest;

/// Default location of the image configuration.
pub const DEFAULT_CONFIG: &str = "config/temurin.yml";

/// Eclipse Temurin container image tooling
#[derive(Parser)]
#[command(name = "temurin")]
#[command(version, about = "Eclipse Temurin container image tooling")]
#[command(long_about = r#"
Generates the Eclipse Temurin Dockerfiles from the latest GA releases and
the docker-library official-images manifest that publishes them.

WORKFLOWS:
  dockerfiles → Render {version}/{type}/{directory}/Dockerfile for every configured image
  manifest    → Write the official-images manifest, reusing published commits

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or missing input
  3 - Configuration validation failure
  4 - Template error
  5 - Upstream fetch failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate Dockerfiles from the latest GA releases
    Dockerfiles(dockerfiles::DockerfilesArgs),

    /// Generate the official-images manifest
    Manifest(manifest::ManifestArgs),
}

/// Flags shared by both commands.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Image configuration file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Repository root holding the version directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
