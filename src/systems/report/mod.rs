mod generator;
mod loader;
mod system;

pub use generator::{control_moments, generate_report, inertia_about_center};
pub use loader::{AssemblyLoader, ReportError};
pub use system::{airframe_report_system, AirframeReportEvent};

use bevy::prelude::{Entity, World};

use crate::components::{AirframeReport, Assembly, AssemblySource, VesselConfig};
use crate::utils::errors::AirframeError;

/// Loads a vessel from `source` and reports on it.
///
/// # Returns
/// The assembly snapshot alongside its report.
pub fn report_from_source(
    source: AssemblySource,
) -> Result<(Assembly, AirframeReport), AirframeError> {
    let assembly = VesselConfig::new(source)?.to_assembly();

    let mut loader = AssemblyLoader::new();
    loader.load(Some(&assembly));
    let report = loader.generate_report()?;

    Ok((assembly, report))
}

/// Report the ECS system attached to `vessel`.
pub fn report_for_entity(world: &World, vessel: Entity) -> Result<AirframeReport, AirframeError> {
    world
        .get::<AirframeReport>(vessel)
        .copied()
        .ok_or(AirframeError::MissingReport(vessel))
}
