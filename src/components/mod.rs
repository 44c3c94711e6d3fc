pub mod assembly;
pub mod report;
pub mod surfaces;

pub use assembly::config::{AssemblySource, ConfigError, PartConfig, VesselConfig, VesselType};
pub use assembly::{Assembly, ForceProducer, ForceSource, MassElement};
pub use report::AirframeReport;
pub use surfaces::{ControlSurface, LiftCurve, LiftingSurface};
