use bevy::{log::LogPlugin, prelude::*};
use std::{env, path::PathBuf};

use airframe::{
    components::{AssemblySource, VesselConfig, VesselType},
    plugins::AirframeReportPlugin,
    resources::ReportConfig,
    systems::report_for_entity,
    utils::AirframeError,
};

const USAGE: &str =
    "usage: airframe_report [VESSEL.yaml] [--json] [--precision N] [--config REPORT.yaml]";

struct Options {
    source: AssemblySource,
    json: bool,
    precision: Option<usize>,
    config: Option<PathBuf>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, AirframeError> {
        let mut options = Options {
            source: AssemblySource::Programmed(VesselType::Glider),
            json: false,
            precision: None,
            config: None,
        };

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--precision" => {
                    let value = args.next().ok_or_else(|| missing_value(arg))?;
                    let precision = value.parse().map_err(|_| {
                        AirframeError::InvalidArgument(format!("bad precision '{}'", value))
                    })?;
                    options.precision = Some(precision);
                }
                "--config" => {
                    let value = args.next().ok_or_else(|| missing_value(arg))?;
                    options.config = Some(PathBuf::from(value));
                }
                flag if flag.starts_with("--") => {
                    return Err(AirframeError::InvalidArgument(format!(
                        "unknown flag '{}'\n{}",
                        flag, USAGE
                    )));
                }
                path => options.source = AssemblySource::File(PathBuf::from(path)),
            }
        }

        Ok(options)
    }
}

fn missing_value(flag: &str) -> AirframeError {
    AirframeError::InvalidArgument(format!("{} needs a value\n{}", flag, USAGE))
}

fn main() -> Result<(), AirframeError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = Options::parse(&args)?;

    let mut config = match &options.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(precision) = options.precision {
        config.precision = precision;
    }
    let precision = config.precision;

    let assembly = VesselConfig::new(options.source)?.to_assembly();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(AirframeReportPlugin::with_config(config));

    let vessel = app.world_mut().spawn(assembly).id();
    app.update();

    let report = report_for_entity(app.world(), vessel)?;

    if options.json {
        let output = serde_json::json!({
            "report": report,
            "factors": {
                "pitch": report.pitch_factor(),
                "roll": report.roll_factor(),
                "yaw": report.yaw_factor(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.render(precision));
    }

    Ok(())
}
