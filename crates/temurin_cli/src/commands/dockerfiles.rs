//! Dockerfiles command - Regenerate Dockerfiles from the latest GA releases.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use temurin_config::TemurinConfig;
use temurin_release::{AdoptiumClient, ReleaseCache, DEFAULT_API_URL};
use temurin_templates::{remove_version_dirs, DockerfileGenerator, TemplateRenderer};

use super::CommonArgs;

/// Cache directory for release API responses, relative to the root.
const CACHE_DIR: &str = ".adoptium_cache";

#[derive(Args)]
pub struct DockerfilesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remove all generated version directories before generating
    #[arg(long)]
    pub force: bool,

    /// Templates directory (defaults to `<root>/docker_templates`)
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Release API base URL
    #[arg(long, env = "ADOPTIUM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Always query the release API instead of the on-disk cache
    #[arg(long)]
    pub no_cache: bool,
}

pub async fn execute(args: DockerfilesArgs, quiet: bool) -> Result<()> {
    let root = args.common.root;
    info!("Generating Dockerfiles in {}", root.display());

    let config = TemurinConfig::load(&args.common.config).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            args.common.config.display()
        )
    })?;

    if args.force {
        let removed = remove_version_dirs(&root).context("Failed to remove version directories")?;
        if !quiet && !removed.is_empty() {
            println!("🧹 Removed {} version director(ies)", removed.len());
        }
    }

    let templates_dir = args
        .templates_dir
        .unwrap_or_else(|| root.join("docker_templates"));
    let renderer = TemplateRenderer::from_dir(&templates_dir)?;

    let mut client = AdoptiumClient::new(&args.api_url)?;
    if !args.no_cache {
        client = client.with_cache(ReleaseCache::new(root.join(CACHE_DIR)));
    }

    let generator = DockerfileGenerator::new(&config, &renderer, &client, &root);
    let summary = generator
        .run()
        .await
        .context("Dockerfile generation failed")?;

    for (version, image_type, directory) in &summary.skipped {
        warn!(
            "No matching binaries for {} {} {}, nothing written",
            version, image_type, directory
        );
    }

    if !quiet {
        println!(
            "✅ Wrote {} Dockerfile(s) and {} entrypoint(s)",
            summary.dockerfiles.len(),
            summary.entrypoints.len()
        );
        if !summary.skipped.is_empty() {
            println!("⚠️  Skipped {} image(s) without binaries", summary.skipped.len());
        }
    }

    Ok(())
}
