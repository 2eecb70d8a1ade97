//! Configuration file loading.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::models::TemurinConfig;

impl TemurinConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        debug!("Reading configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;

        info!(
            "Loaded configuration: {} versions, {} OS families",
            config.versions().len(),
            config.configurations.len()
        );

        Ok(config)
    }
}
