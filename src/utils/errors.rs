use bevy::prelude::Entity;
use thiserror::Error;

use crate::components::ConfigError;
use crate::systems::ReportError;

#[derive(Error, Debug)]
pub enum AirframeError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No airframe report on entity {0:?}")]
    MissingReport(Entity),
}
