//! Template loading and rendering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::context::{DockerfileContext, EntrypointContext};
use crate::error::{TemplateError, TemplateResult};

/// Extension of files loaded as templates.
const TEMPLATE_EXTENSION: &str = "j2";

/// Renders the Dockerfile and entrypoint templates.
pub struct TemplateRenderer {
    tera: Tera,
    templates_dir: PathBuf,
}

impl TemplateRenderer {
    /// Load every `*.j2` file below `templates_dir`.
    ///
    /// Templates are named by their `/`-separated path relative to the
    /// directory, so partials are included as `partials/jshell.j2`.
    pub fn from_dir(templates_dir: impl Into<PathBuf>) -> TemplateResult<Self> {
        let templates_dir = templates_dir.into();
        if !templates_dir.is_dir() {
            return Err(TemplateError::DirectoryNotFound(templates_dir));
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&templates_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != TEMPLATE_EXTENSION) {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&templates_dir) else {
                continue;
            };
            let name = relative.to_string_lossy().replace('\\', "/");
            let content = fs::read_to_string(path)?;
            debug!("Loaded template: {}", name);
            templates.push((name, content));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;

        info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            templates_dir.display()
        );

        Ok(Self {
            tera,
            templates_dir,
        })
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// All loaded template names, sorted.
    pub fn list_templates(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(String::from).collect();
        names.sort();
        names
    }

    /// Render a template with any serializable context.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> TemplateResult<String> {
        if !self.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let context = Context::from_serialize(context)?;
        let rendered = self.tera.render(name, &context)?;
        debug!("Rendered template {} ({} bytes)", name, rendered.len());
        Ok(rendered)
    }

    pub fn render_dockerfile(&self, context: &DockerfileContext) -> TemplateResult<String> {
        self.render(&context.template_name(), context)
    }

    pub fn render_entrypoint(&self, context: &EntrypointContext) -> TemplateResult<String> {
        self.render(EntrypointContext::TEMPLATE, context)
    }
}
