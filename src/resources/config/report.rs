use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::ConfigError;

/// Configuration for airframe report generation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimals used when rendering reports.
    pub precision: usize,
    /// Log reports with infinite or NaN factors as warnings.
    pub warn_on_sentinel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            warn_on_sentinel: true,
        }
    }
}

impl ReportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
