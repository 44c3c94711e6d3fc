use airframe::{
    components::{AssemblySource, ConfigError, VesselConfig, VesselType},
    systems::{generate_report, report_from_source},
    utils::AirframeError,
};
use pretty_assertions::assert_eq;
use std::io::Write;

use crate::common::{assert_bit_identical, config_path, create_glider};

#[test]
fn test_glider_file_matches_programmed_vessel() {
    let from_file = VesselConfig::new(AssemblySource::File(config_path("glider.yaml"))).unwrap();
    assert_eq!(from_file, VesselConfig::glider());
}

#[test]
fn test_report_from_file_source() {
    let (assembly, report) =
        report_from_source(AssemblySource::File(config_path("glider.yaml"))).unwrap();

    assert_eq!(assembly, create_glider());
    assert_bit_identical(&report, &generate_report(&create_glider()));
}

#[test]
fn test_report_from_programmed_source() {
    let (assembly, _) = report_from_source(AssemblySource::Programmed(VesselType::Glider)).unwrap();
    assert_eq!(assembly.name, "Glider");
}

#[test]
fn test_missing_vessel_file() {
    let result = report_from_source(AssemblySource::File(config_path("does_not_exist.yaml")));
    assert!(matches!(
        result,
        Err(AirframeError::Config(ConfigError::FileError(_)))
    ));
}

#[test]
fn test_unvalidated_physical_values_pass_through() {
    // Negative mass is accepted as given.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "name: odd\ncenter_of_mass: [0.0, 0.0, 0.0]\nparts:\n  - name: p\n    mass: -1.0\n    position: [0.0, 2.0, 0.0]\n"
    )
    .unwrap();

    let (_, report) = report_from_source(AssemblySource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(report.pitch_inertia, -4.0);
}
