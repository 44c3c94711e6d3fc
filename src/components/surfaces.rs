use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::assembly::config::ConfigError;

/// Piecewise-linear lift response curve, keyed by deflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftCurve {
    /// `(deflection, lift coefficient)` keyframes.
    pub keys: Vec<(f64, f64)>,
}

impl LiftCurve {
    pub fn new(keys: Vec<(f64, f64)>) -> Self {
        Self { keys }
    }

    /// Lowest and highest value reached by the curve.
    ///
    /// A piecewise-linear curve attains its extrema on the keyframes, so only the keys are
    /// visited. Returns `None` for a curve without keys.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut values = self.keys.iter().map(|(_, value)| *value);
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keys.is_empty() {
            return Err(ConfigError::ValidationError(
                "lift curve must contain at least one key".to_string(),
            ));
        }
        Ok(())
    }
}

/// A passive lifting surface such as a wing panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingSurface {
    /// Lift coefficient scale applied to the curve.
    pub deflection_lift_coeff: f64,
    pub lift_curve: LiftCurve,
}

impl LiftingSurface {
    pub fn new(deflection_lift_coeff: f64, lift_curve: LiftCurve) -> Self {
        Self {
            deflection_lift_coeff,
            lift_curve,
        }
    }

    /// Scaled magnitude of the larger curve extreme.
    pub fn force_capability(&self) -> f64 {
        match self.lift_curve.min_max() {
            Some((min, max)) => self.deflection_lift_coeff * min.abs().max(max.abs()),
            None => 0.0,
        }
    }
}

/// An actively deflected control surface (elevator, aileron, rudder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    /// Lift vector at full positive deflection (N).
    pub potential_lift_positive: Vector3<f64>,
    /// Lift vector at full negative deflection (N).
    pub potential_lift_negative: Vector3<f64>,
}

impl ControlSurface {
    pub fn new(potential_lift_positive: Vector3<f64>, potential_lift_negative: Vector3<f64>) -> Self {
        Self {
            potential_lift_positive,
            potential_lift_negative,
        }
    }

    pub fn force_capability(&self) -> f64 {
        self.potential_lift_positive
            .norm()
            .max(self.potential_lift_negative.norm())
    }
}
