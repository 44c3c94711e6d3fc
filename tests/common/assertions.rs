use airframe::components::AirframeReport;
use approx::assert_relative_eq;
use nalgebra::Vector3;

/// Assert that two vectors agree to a relative tolerance
#[track_caller]
pub fn assert_vector_close(actual: &Vector3<f64>, expected: &[f64; 3], max_relative: f64) {
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-12, max_relative = max_relative);
    }
}

/// Assert that two reports agree field by field to a relative tolerance
#[track_caller]
pub fn assert_report_close(actual: &AirframeReport, expected: &AirframeReport, max_relative: f64) {
    let pairs = [
        (actual.pitch_inertia, expected.pitch_inertia),
        (actual.roll_inertia, expected.roll_inertia),
        (actual.yaw_inertia, expected.yaw_inertia),
        (actual.pitch_moment, expected.pitch_moment),
        (actual.roll_moment, expected.roll_moment),
        (actual.yaw_moment, expected.yaw_moment),
    ];
    for (a, e) in pairs {
        assert_relative_eq!(a, e, epsilon = 1e-12, max_relative = max_relative);
    }
}

/// Assert that two reports are identical down to the bit pattern of every field
#[track_caller]
pub fn assert_bit_identical(actual: &AirframeReport, expected: &AirframeReport) {
    let bits = |r: &AirframeReport| {
        [
            r.pitch_inertia,
            r.roll_inertia,
            r.yaw_inertia,
            r.pitch_moment,
            r.roll_moment,
            r.yaw_moment,
        ]
        .map(f64::to_bits)
    };
    assert_eq!(bits(actual), bits(expected), "reports differ in bit pattern");
}
