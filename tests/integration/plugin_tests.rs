use airframe::{
    resources::ReportConfig,
    systems::{generate_report, report_for_entity},
    utils::AirframeError,
};
use approx::assert_relative_eq;

use crate::common::{
    assert_bit_identical, create_dumbbell, create_glider, create_tail_elevator, TestAppBuilder,
};

#[test]
fn test_report_component_inserted() {
    let mut app = TestAppBuilder::new()
        .with_assembly(create_glider())
        .with_assembly(create_dumbbell())
        .build();

    app.run_frame();

    let glider = app.vessels[0];
    let dumbbell = app.vessels[1];
    assert_bit_identical(
        &app.report(glider).expect("glider report"),
        &generate_report(&create_glider()),
    );
    assert_bit_identical(
        &app.report(dumbbell).expect("dumbbell report"),
        &generate_report(&create_dumbbell()),
    );
    assert_eq!(app.report_events(), 2);
}

#[test]
fn test_report_follows_assembly_changes() {
    let mut app = TestAppBuilder::new()
        .with_assembly(create_tail_elevator(5.0))
        .with_report_config(ReportConfig {
            precision: 3,
            warn_on_sentinel: false,
        })
        .build();
    let vessel = app.vessels[0];

    app.run_frame();
    assert_relative_eq!(app.report(vessel).unwrap().pitch_moment, 15.0);

    if let Some(mut assembly) = app.assembly_mut(vessel) {
        assembly.force_producers[0].force_capability = 2.0;
    } else {
        panic!("Assembly not found");
    }
    app.run_frame();

    assert_relative_eq!(app.report(vessel).unwrap().pitch_moment, 6.0);
}

#[test]
fn test_no_report_before_first_frame() {
    let mut app = TestAppBuilder::new().with_assembly(create_glider()).build();
    let vessel = app.vessels[0];
    assert!(app.report(vessel).is_none());
    assert!(matches!(
        report_for_entity(app.app.world(), vessel),
        Err(AirframeError::MissingReport(e)) if e == vessel
    ));

    app.run_frame();
    assert_bit_identical(
        &report_for_entity(app.app.world(), vessel).unwrap(),
        &generate_report(&create_glider()),
    );
}
