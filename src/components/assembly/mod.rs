//! Read-only snapshot of a vessel: its point masses, its force producers and the
//! externally supplied center of mass.
//!
//! Body axes follow the vessel frame: `x` to starboard, `y` along the nose and `z`
//! through the belly. Pitch is rotation about `x`, roll about `y` and yaw about `z`.

pub mod config;

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A part treated as a point mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassElement {
    pub name: String,
    /// Position in the vessel frame (m).
    pub position: Vector3<f64>,
    /// Mass (t or kg, consistently with the rest of the vessel).
    pub mass: f64,
}

impl MassElement {
    pub fn new(name: impl Into<String>, position: Vector3<f64>, mass: f64) -> Self {
        Self {
            name: name.into(),
            position,
            mass,
        }
    }
}

/// Which behaviour of a part generates the force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceSource {
    LiftingSurface,
    ControlSurface,
}

/// One force-generating behaviour attached to a part.
///
/// A physical part carrying both a lifting and a control behaviour is enumerated as two
/// producers, each contributing its own capability to the moment sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceProducer {
    /// Name of the part this producer is attached to.
    pub part: String,
    pub source: ForceSource,
    pub position: Vector3<f64>,
    /// Largest force magnitude the producer can generate, direction ignored.
    pub force_capability: f64,
}

impl ForceProducer {
    pub fn new(
        part: impl Into<String>,
        source: ForceSource,
        position: Vector3<f64>,
        force_capability: f64,
    ) -> Self {
        Self {
            part: part.into(),
            source,
            position,
            force_capability,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub name: String,
    /// Every part, in enumeration order.
    pub parts: Vec<MassElement>,
    /// Every force producer, in enumeration order.
    pub force_producers: Vec<ForceProducer>,
    /// Center of mass as reported by the vessel; never recomputed from `parts`.
    pub center_of_mass: Vector3<f64>,
}

impl Assembly {
    pub fn new(name: impl Into<String>, center_of_mass: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            force_producers: Vec::new(),
            center_of_mass,
        }
    }

    pub fn with_part(mut self, part: MassElement) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_force_producer(mut self, producer: ForceProducer) -> Self {
        self.force_producers.push(producer);
        self
    }

    /// Displacement of `position` from the center of mass.
    pub fn displacement(&self, position: &Vector3<f64>) -> Vector3<f64> {
        position - self.center_of_mass
    }

    pub fn lifting_surfaces(&self) -> impl Iterator<Item = &ForceProducer> {
        self.producers_of(ForceSource::LiftingSurface)
    }

    pub fn control_surfaces(&self) -> impl Iterator<Item = &ForceProducer> {
        self.producers_of(ForceSource::ControlSurface)
    }

    fn producers_of(&self, source: ForceSource) -> impl Iterator<Item = &ForceProducer> {
        self.force_producers
            .iter()
            .filter(move |producer| producer.source == source)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.force_producers.is_empty()
    }
}
