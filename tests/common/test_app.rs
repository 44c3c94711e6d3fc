use airframe::{
    components::{AirframeReport, Assembly},
    plugins::AirframeReportPlugin,
    resources::ReportConfig,
    systems::AirframeReportEvent,
};
use bevy::prelude::*;

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    assemblies: Vec<Assembly>,
    report_config: Option<ReportConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assembly(mut self, assembly: Assembly) -> Self {
        self.assemblies.push(assembly);
        self
    }

    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins).add_plugins(
            AirframeReportPlugin::with_config(self.report_config.unwrap_or_default()),
        );

        let vessels = self
            .assemblies
            .into_iter()
            .map(|assembly| app.world_mut().spawn(assembly).id())
            .collect();

        TestApp { app, vessels }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub vessels: Vec<Entity>,
}

impl TestApp {
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn report(&self, vessel: Entity) -> Option<AirframeReport> {
        self.app.world().get::<AirframeReport>(vessel).copied()
    }

    pub fn assembly_mut(&mut self, vessel: Entity) -> Option<Mut<Assembly>> {
        self.app.world_mut().get_mut::<Assembly>(vessel)
    }

    pub fn report_events(&self) -> usize {
        self.app
            .world()
            .resource::<Events<AirframeReportEvent>>()
            .len()
    }
}
