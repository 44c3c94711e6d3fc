use bevy::prelude::*;

use crate::components::{AirframeReport, Assembly};
use crate::resources::ReportConfig;
use crate::systems::report::generate_report;

/// Sent whenever a vessel's report is (re)generated.
#[derive(Event, Debug, Clone)]
pub struct AirframeReportEvent {
    pub entity: Entity,
    pub report: AirframeReport,
}

/// Regenerates the [`AirframeReport`] of every entity whose [`Assembly`] was added or changed.
pub fn airframe_report_system(
    mut commands: Commands,
    query: Query<(Entity, &Assembly), Changed<Assembly>>,
    config: Res<ReportConfig>,
    mut events: EventWriter<AirframeReportEvent>,
) {
    for (entity, assembly) in query.iter() {
        let report = generate_report(assembly);

        if config.warn_on_sentinel && report.has_sentinel_factors() {
            warn!(
                "Airframe report for {} has non-finite factors: {}",
                assembly.name,
                report.render(config.precision)
            );
        } else {
            info!(
                "Airframe report for {}: {}",
                assembly.name,
                report.render(config.precision)
            );
        }

        commands.entity(entity).insert(report);
        events.send(AirframeReportEvent { entity, report });
    }
}
