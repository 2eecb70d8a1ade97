//! Dockerfile generation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use temurin_config::{TemurinConfig, WINDOWS_FAMILY};
use temurin_release::{openjdk_version, select_arch_data, ReleaseSource, Selection};

use crate::context::{DockerfileContext, EntrypointContext};
use crate::error::{TemplateError, TemplateResult};
use crate::renderer::TemplateRenderer;

/// Files written by a generation run.
#[derive(Debug, Default, Clone)]
pub struct GenerationSummary {
    pub dockerfiles: Vec<PathBuf>,
    pub entrypoints: Vec<PathBuf>,
    /// (version, image type, directory) combinations with no matching binary.
    pub skipped: Vec<(u32, String, String)>,
}

/// Renders one Dockerfile per configuration entry, version and image type.
pub struct DockerfileGenerator<'a, S: ReleaseSource> {
    config: &'a TemurinConfig,
    renderer: &'a TemplateRenderer,
    source: &'a S,
    output_root: PathBuf,
}

impl<'a, S: ReleaseSource> DockerfileGenerator<'a, S> {
    pub fn new(
        config: &'a TemurinConfig,
        renderer: &'a TemplateRenderer,
        source: &'a S,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            renderer,
            source,
            output_root: output_root.into(),
        }
    }

    /// Generate every Dockerfile (and entrypoint) under
    /// `{version}/{image_type}/{directory}`.
    pub async fn run(&self) -> TemplateResult<GenerationSummary> {
        let mut summary = GenerationSummary::default();

        for (os_family, entry) in self.config.entries() {
            let template_name = format!("{}.Dockerfile.j2", entry.os);
            if !self.renderer.has_template(&template_name) {
                return Err(TemplateError::NotFound(template_name));
            }

            for version in entry.active_versions(self.config) {
                info!("Generating Dockerfiles for {} - {}", entry.image, version);

                for image_type in &self.config.metadata.image_types {
                    let output_dir = self
                        .output_root
                        .join(version.to_string())
                        .join(image_type)
                        .join(&entry.directory);
                    fs::create_dir_all(&output_dir)?;

                    let release = self
                        .source
                        .latest_release(version, image_type, os_family)
                        .await?;
                    let java_version = openjdk_version(&release, version);

                    let selection = Selection {
                        architectures: &entry.architectures,
                        os_family,
                        os: &entry.os,
                        image_type,
                        java_version: &java_version,
                        version,
                        base_image_tag: entry.base_image_tag().unwrap_or("latest"),
                    };
                    let Some(arch_data) = select_arch_data(&release, &selection) else {
                        debug!(
                            "No binaries for {} {} {}, leaving {:?} untouched",
                            version, image_type, entry.directory, output_dir
                        );
                        summary
                            .skipped
                            .push((version, image_type.clone(), entry.directory.clone()));
                        continue;
                    };

                    let context = DockerfileContext {
                        base_image: entry.image.clone(),
                        image_type: image_type.clone(),
                        java_version,
                        version,
                        arch_data,
                        os_family: os_family.to_string(),
                        os: entry.os.clone(),
                    };
                    let dockerfile = self.renderer.render_dockerfile(&context)?;

                    let dockerfile_path = output_dir.join("Dockerfile");
                    info!("Writing Dockerfile to {}", output_dir.display());
                    fs::write(&dockerfile_path, dockerfile)?;
                    summary.dockerfiles.push(dockerfile_path);

                    // CA certificate handling is not available on Windows.
                    if os_family != WINDOWS_FAMILY {
                        let entrypoint = self.renderer.render_entrypoint(&EntrypointContext {
                            image_type: image_type.clone(),
                            os: entry.os.clone(),
                            version,
                        })?;
                        let entrypoint_path = output_dir.join("entrypoint.sh");
                        write_executable(&entrypoint_path, &entrypoint)?;
                        summary.entrypoints.push(entrypoint_path);
                    }
                }
            }
        }

        Ok(summary)
    }
}

fn write_executable(path: &Path, content: &str) -> TemplateResult<()> {
    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}

/// Remove the top-level directories whose names are all digits, i.e.
/// previously generated version trees.
pub fn remove_version_dirs(root: &Path) -> TemplateResult<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !entry.file_type()?.is_dir()
            || name.is_empty()
            || !name.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }

        info!("Removing {}", name);
        fs::remove_dir_all(entry.path())?;
        removed.push(entry.path());
    }

    removed.sort();
    Ok(removed)
}
