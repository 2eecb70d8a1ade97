//! Variables exposed to the templates.

use serde::Serialize;
use temurin_release::ArchData;

/// Context for `{os}.Dockerfile.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct DockerfileContext {
    pub base_image: String,
    pub image_type: String,
    pub java_version: String,
    pub version: u32,
    pub arch_data: ArchData,
    pub os_family: String,
    pub os: String,
}

impl DockerfileContext {
    pub fn template_name(&self) -> String {
        format!("{}.Dockerfile.j2", self.os)
    }
}

/// Context for `entrypoint.sh.j2`.
#[derive(Debug, Clone, Serialize)]
pub struct EntrypointContext {
    pub image_type: String,
    pub os: String,
    pub version: u32,
}

impl EntrypointContext {
    pub const TEMPLATE: &'static str = "entrypoint.sh.j2";
}
