pub mod report;

pub use report::{
    airframe_report_system, control_moments, generate_report, inertia_about_center,
    report_for_entity, report_from_source, AirframeReportEvent, AssemblyLoader, ReportError,
};
