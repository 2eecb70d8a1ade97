//! Manifest command - Write the official-images manifest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use temurin_config::TemurinConfig;
use temurin_manifest::{GitHistory, ManifestGenerator, PreviousManifest, OFFICIAL_MANIFEST_URL};

use super::CommonArgs;

#[derive(Args)]
pub struct ManifestArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file
    #[arg(short, long, default_value = "eclipse-temurin")]
    pub output: PathBuf,

    /// URL of the currently published manifest
    #[arg(long, default_value = OFFICIAL_MANIFEST_URL, conflicts_with = "previous_manifest")]
    pub previous_url: String,

    /// Read the currently published manifest from a local file instead
    #[arg(long)]
    pub previous_manifest: Option<PathBuf>,
}

pub async fn execute(args: ManifestArgs, quiet: bool) -> Result<()> {
    let root = args.common.root;

    let config = TemurinConfig::load(&args.common.config).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            args.common.config.display()
        )
    })?;

    let previous = match &args.previous_manifest {
        Some(path) => PreviousManifest::load(path)
            .with_context(|| format!("Failed to read previous manifest {}", path.display()))?,
        None => PreviousManifest::fetch(&args.previous_url)
            .await
            .context("Failed to fetch previous manifest")?,
    };

    if !GitHistory::is_git_available() {
        anyhow::bail!("git executable not found");
    }
    let history = GitHistory::new(&root);

    info!("Generating manifest for {}", root.display());
    let generator = ManifestGenerator::new(&config, &history, &previous, &root)?;
    generator
        .write(&args.output)
        .with_context(|| format!("Failed to write manifest {}", args.output.display()))?;

    if !quiet {
        println!("✅ Manifest written to {}", args.output.display());
    }

    Ok(())
}
