use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::assembly::{ForceProducer, ForceSource, MassElement};
use crate::components::surfaces::{ControlSurface, LiftingSurface};

/// A single part of a vessel description, with its optional aerodynamic modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartConfig {
    pub name: String,
    pub mass: f64,
    /// Position in the vessel frame (m).
    pub position: Vector3<f64>,
    #[serde(default)]
    pub lifting_surface: Option<LiftingSurface>,
    #[serde(default)]
    pub control_surface: Option<ControlSurface>,
}

impl PartConfig {
    pub fn new(name: impl Into<String>, mass: f64, position: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            lifting_surface: None,
            control_surface: None,
        }
    }

    pub fn with_lifting_surface(mut self, surface: LiftingSurface) -> Self {
        self.lifting_surface = Some(surface);
        self
    }

    pub fn with_control_surface(mut self, surface: ControlSurface) -> Self {
        self.control_surface = Some(surface);
        self
    }

    pub fn mass_element(&self) -> MassElement {
        MassElement::new(self.name.clone(), self.position, self.mass)
    }

    /// One producer per attached module, lifting before control.
    pub fn force_producers(&self) -> Vec<ForceProducer> {
        let lifting = self.lifting_surface.as_ref().map(|surface| {
            ForceProducer::new(
                self.name.clone(),
                ForceSource::LiftingSurface,
                self.position,
                surface.force_capability(),
            )
        });
        let control = self.control_surface.as_ref().map(|surface| {
            ForceProducer::new(
                self.name.clone(),
                ForceSource::ControlSurface,
                self.position,
                surface.force_capability(),
            )
        });
        lifting.into_iter().chain(control).collect()
    }
}
