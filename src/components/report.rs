use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static report card of an assembled airframe.
///
/// Holds the diagonal moments of inertia about the center of mass and the control
/// moment available about each axis. Factors are derived on every read and are not
/// stored.
///
/// Factors are not guarded: a zero inertia yields an infinite factor and a vessel with
/// neither mass nor force producers yields NaN. Callers must check with
/// [`AirframeReport::has_sentinel_factors`] before relying on them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirframeReport {
    /// Control moment about the pitch axis (N·m).
    pub pitch_moment: f64,
    /// Control moment about the roll axis (N·m).
    pub roll_moment: f64,
    /// Control moment about the yaw axis (N·m).
    pub yaw_moment: f64,
    /// Moment of inertia about the pitch axis (kg·m²).
    pub pitch_inertia: f64,
    /// Moment of inertia about the roll axis (kg·m²).
    pub roll_inertia: f64,
    /// Moment of inertia about the yaw axis (kg·m²).
    pub yaw_inertia: f64,
}

impl AirframeReport {
    pub fn new(
        pitch_moment: f64,
        roll_moment: f64,
        yaw_moment: f64,
        pitch_inertia: f64,
        roll_inertia: f64,
        yaw_inertia: f64,
    ) -> Self {
        Self {
            pitch_moment,
            roll_moment,
            yaw_moment,
            pitch_inertia,
            roll_inertia,
            yaw_inertia,
        }
    }

    pub fn pitch_factor(&self) -> f64 {
        self.pitch_moment / self.pitch_inertia
    }

    pub fn roll_factor(&self) -> f64 {
        self.roll_moment / self.roll_inertia
    }

    pub fn yaw_factor(&self) -> f64 {
        self.yaw_moment / self.yaw_inertia
    }

    /// Inertia as `(pitch, roll, yaw)`.
    pub fn inertia(&self) -> Vector3<f64> {
        Vector3::new(self.pitch_inertia, self.roll_inertia, self.yaw_inertia)
    }

    /// Control moments as `(pitch, roll, yaw)`.
    pub fn moment(&self) -> Vector3<f64> {
        Vector3::new(self.pitch_moment, self.roll_moment, self.yaw_moment)
    }

    /// Factors as `(pitch, roll, yaw)`.
    pub fn factors(&self) -> Vector3<f64> {
        Vector3::new(self.pitch_factor(), self.roll_factor(), self.yaw_factor())
    }

    /// True when any factor is infinite or NaN.
    pub fn has_sentinel_factors(&self) -> bool {
        self.factors().iter().any(|factor| !factor.is_finite())
    }

    /// Renders the report with `precision` decimals.
    pub fn render(&self, precision: usize) -> String {
        format!(
            "inertia={:.p$}, {:.p$}, {:.p$}; moment={:.p$}, {:.p$}, {:.p$}, factor={:.p$}, {:.p$}, {:.p$}",
            self.pitch_inertia,
            self.roll_inertia,
            self.yaw_inertia,
            self.pitch_moment,
            self.roll_moment,
            self.yaw_moment,
            self.pitch_factor(),
            self.roll_factor(),
            self.yaw_factor(),
            p = precision
        )
    }
}

impl fmt::Display for AirframeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(2))
    }
}
