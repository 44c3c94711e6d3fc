use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::assembly::config::{ConfigError, PartConfig};
use crate::components::assembly::Assembly;
use crate::components::surfaces::{ControlSurface, LiftCurve, LiftingSurface};

/// Description of a vessel as supplied by the vehicle data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    pub name: String,
    /// Center of mass reported by the vessel (m). Taken as ground truth.
    pub center_of_mass: Vector3<f64>,
    #[serde(default)]
    pub parts: Vec<PartConfig>,
}

/// Source for a vessel description.
/// Either a hardcoded vessel (`Programmed`) or a YAML file.
#[derive(Debug, Clone)]
pub enum AssemblySource {
    Programmed(VesselType),
    File(PathBuf),
}

/// Vessels available without a description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselType {
    Glider,
}

impl VesselConfig {
    /// Creates a vessel description from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AssemblySource` specifying a programmed vessel or a file to load.
    ///
    /// # Returns
    /// A `Result` containing the description or an error if the file fails to load.
    pub fn new(source: AssemblySource) -> Result<Self, ConfigError> {
        match source {
            AssemblySource::Programmed(vessel_type) => Ok(Self::from_programmed(vessel_type)),
            AssemblySource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(vessel_type: VesselType) -> Self {
        match vessel_type {
            VesselType::Glider => Self::glider(),
        }
    }

    /// Small sailplane: fuselage, nose ballast, two wing panels, elevator and an all-moving
    /// fin that is both a lifting and a control surface.
    pub fn glider() -> Self {
        let wing_curve = LiftCurve::new(vec![(-0.5, -0.8), (0.0, 0.0), (0.5, 1.2)]);
        let fin_curve = LiftCurve::new(vec![(-0.5, -0.6), (0.0, 0.0), (0.5, 0.6)]);

        Self {
            name: "Glider".to_string(),
            center_of_mass: Vector3::new(0.0, 0.0625, 0.015625),
            parts: vec![
                PartConfig::new("fuselage", 4.0, Vector3::zeros()),
                PartConfig::new("nose", 1.0, Vector3::new(0.0, 2.0, 0.0)),
                PartConfig::new("wing_port", 0.5, Vector3::new(-3.0, 0.0, 0.0))
                    .with_lifting_surface(LiftingSurface::new(1.0, wing_curve.clone())),
                PartConfig::new("wing_starboard", 0.5, Vector3::new(3.0, 0.0, 0.0))
                    .with_lifting_surface(LiftingSurface::new(1.0, wing_curve)),
                PartConfig::new("elevator", 0.2, Vector3::new(0.0, -4.0, 0.0))
                    .with_control_surface(ControlSurface::new(
                        Vector3::new(0.0, 0.0, 0.6),
                        Vector3::new(0.0, 0.0, -0.4),
                    )),
                PartConfig::new("fin", 0.2, Vector3::new(0.0, -4.0, 0.5))
                    .with_lifting_surface(LiftingSurface::new(0.5, fin_curve))
                    .with_control_surface(ControlSurface::new(
                        Vector3::new(0.3, 0.0, 0.0),
                        Vector3::new(-0.3, 0.0, 0.0),
                    )),
            ],
        }
    }

    /// Snapshot of this description as an [`Assembly`].
    ///
    /// Parts keep their order. Each attached lifting or control module becomes its own
    /// force producer, so a part carrying both contributes twice to the moment sums.
    pub fn to_assembly(&self) -> Assembly {
        Assembly {
            name: self.name.clone(),
            parts: self.parts.iter().map(PartConfig::mass_element).collect(),
            force_producers: self
                .parts
                .iter()
                .flat_map(PartConfig::force_producers)
                .collect(),
            center_of_mass: self.center_of_mass,
        }
    }
}
