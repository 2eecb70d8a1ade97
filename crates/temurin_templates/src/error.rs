//! Error types for templates.

use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template rendering and Dockerfile generation.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Templates directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Template rendering failed: {0}")]
    RenderingFailed(String),

    #[error("Release lookup failed: {0}")]
    Release(#[from] temurin_release::ReleaseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        // Tera keeps the useful detail in the source chain.
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        TemplateError::RenderingFailed(message)
    }
}
