//! # temurin_templates
//!
//! Dockerfile and entrypoint rendering for the Temurin image family.
//!
//! Templates are Jinja-style files rendered with Tera. Each configuration
//! entry selects `{os}.Dockerfile.j2`; non-Windows images also get an
//! `entrypoint.sh` rendered from `entrypoint.sh.j2`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use temurin_config::TemurinConfig;
//! use temurin_release::AdoptiumClient;
//! use temurin_templates::{DockerfileGenerator, TemplateRenderer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TemurinConfig::load("config/temurin.yml")?;
//! let renderer = TemplateRenderer::from_dir("docker_templates")?;
//! let client = AdoptiumClient::new(temurin_release::DEFAULT_API_URL)?;
//!
//! let summary = DockerfileGenerator::new(&config, &renderer, &client, ".")
//!     .run()
//!     .await?;
//! println!("wrote {} Dockerfiles", summary.dockerfiles.len());
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod generator;
pub mod renderer;

pub use context::{DockerfileContext, EntrypointContext};
pub use error::{TemplateError, TemplateResult};
pub use generator::{remove_version_dirs, DockerfileGenerator, GenerationSummary};
pub use renderer::TemplateRenderer;
