mod loader;
mod part;
mod vessel;

pub use loader::ConfigError;
pub use part::PartConfig;
pub use vessel::{AssemblySource, VesselConfig, VesselType};
