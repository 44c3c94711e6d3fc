use std::path::Path;
use thiserror::Error;

use crate::components::assembly::config::VesselConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vessel configuration: {0}")]
    ValidationError(String),
}

impl VesselConfig {
    /// Reads and validates a vessel description from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: VesselConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects descriptions that cannot be turned into an assembly.
    ///
    /// Physical plausibility (negative mass, non-finite positions) is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for part in &self.parts {
            if let Some(lifting) = &part.lifting_surface {
                if let Err(ConfigError::ValidationError(reason)) = lifting.lift_curve.validate() {
                    return Err(ConfigError::ValidationError(format!(
                        "part '{}': {}",
                        part.name, reason
                    )));
                }
            }
        }
        Ok(())
    }
}
