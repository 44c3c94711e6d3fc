use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AirframeReport, Assembly, ForceProducer};

/// Sum seeded with `+0.0`, so an empty reduction yields positive zero.
fn sum_from_zero(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, v| acc + v)
}

/// Point-mass moments of inertia about the center of mass as `(pitch, roll, yaw)`.
///
/// Only the diagonal of the tensor is produced; products of inertia are ignored and
/// parts have no size of their own.
pub fn inertia_about_center(assembly: &Assembly) -> Vector3<f64> {
    let displaced = || {
        assembly
            .parts
            .iter()
            .map(|part| (part.mass, assembly.displacement(&part.position)))
    };

    let pitch = sum_from_zero(displaced().map(|(m, d)| m * (d.y.powi(2) + d.z.powi(2))));
    let roll = sum_from_zero(displaced().map(|(m, d)| m * (d.x.powi(2) + d.z.powi(2))));
    let yaw = sum_from_zero(displaced().map(|(m, d)| m * (d.x.powi(2) + d.y.powi(2))));

    Vector3::new(pitch, roll, yaw)
}

fn pitch_arm(d: &Vector3<f64>) -> f64 {
    (d.y.powi(2) + d.z.powi(2)).sqrt()
}

fn roll_arm(d: &Vector3<f64>) -> f64 {
    (d.x.powi(2) + d.z.powi(2)).sqrt()
}

fn yaw_arm(d: &Vector3<f64>) -> f64 {
    (d.x.powi(2) + d.y.powi(2)).sqrt()
}

fn arm_sum(
    assembly: &Assembly,
    producers: &[&ForceProducer],
    arm: fn(&Vector3<f64>) -> f64,
) -> f64 {
    sum_from_zero(
        producers
            .iter()
            .map(|p| p.force_capability * arm(&assembly.displacement(&p.position))),
    )
}

/// Control moments as `(pitch, roll, yaw)`.
///
/// Every producer contributes its capability times its distance from the center of mass
/// projected onto the plane normal to the axis. Lifting surfaces are summed before
/// control surfaces, each in enumeration order.
pub fn control_moments(assembly: &Assembly) -> Vector3<f64> {
    let lifting: Vec<&ForceProducer> = assembly.lifting_surfaces().collect();
    let control: Vec<&ForceProducer> = assembly.control_surfaces().collect();

    let axis_moment = |arm: fn(&Vector3<f64>) -> f64| -> f64 {
        let mut moment = 0.0;
        moment += arm_sum(assembly, &lifting, arm);
        moment += arm_sum(assembly, &control, arm);
        moment
    };

    Vector3::new(
        axis_moment(pitch_arm),
        axis_moment(roll_arm),
        axis_moment(yaw_arm),
    )
}

/// Parses the assembly to compute moments of inertia and control authority.
///
/// Pure and deterministic: the same assembly in the same order always yields a
/// bit-identical report.
pub fn generate_report(assembly: &Assembly) -> AirframeReport {
    let com = assembly.center_of_mass;
    debug!(
        "generate_report {} com={:.3},{:.3},{:.3}",
        assembly.name, com.x, com.y, com.z
    );
    for part in &assembly.parts {
        debug!(
            "generate_report part={}, mass={:.3}, pos={:.3},{:.3},{:.3}",
            part.name, part.mass, part.position.x, part.position.y, part.position.z
        );
    }

    let inertia = inertia_about_center(assembly);

    debug!(
        "generate_report lift={}, ctrl={}",
        assembly.lifting_surfaces().count(),
        assembly.control_surfaces().count()
    );
    for producer in &assembly.force_producers {
        debug!(
            "generate_report part={}, {:?}={}",
            producer.part, producer.source, producer.force_capability
        );
    }

    let moment = control_moments(assembly);

    let report = AirframeReport::new(
        moment.x, moment.y, moment.z, inertia.x, inertia.y, inertia.z,
    );
    debug!("generate_report {} {}", assembly.name, report);
    report
}
