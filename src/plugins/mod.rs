mod report;

pub use report::{AirframeReportPlugin, ReportSet};
