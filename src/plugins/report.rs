use bevy::prelude::*;

use crate::resources::ReportConfig;
use crate::systems::{airframe_report_system, AirframeReportEvent};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum ReportSet {
    Generate,
}

/// Keeps an `AirframeReport` component in sync with each entity's `Assembly`.
#[derive(Default)]
pub struct AirframeReportPlugin {
    pub config: ReportConfig,
}

impl AirframeReportPlugin {
    pub fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl Plugin for AirframeReportPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .add_event::<AirframeReportEvent>();

        app.configure_sets(Update, ReportSet::Generate);

        app.add_systems(
            Update,
            airframe_report_system.in_set(ReportSet::Generate),
        );
    }
}
