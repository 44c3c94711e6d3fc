use bevy::prelude::*;
use thiserror::Error;

use crate::components::{AirframeReport, Assembly};
use crate::systems::report::generate_report;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("No assembly loaded, call load first")]
    NotLoaded,
}

/// Binds report generation to one assembly snapshot.
///
/// The loader borrows the assembly, so the owner cannot modify it while it is loaded.
#[derive(Debug, Default)]
pub struct AssemblyLoader<'a> {
    assembly: Option<&'a Assembly>,
}

impl<'a> AssemblyLoader<'a> {
    pub fn new() -> Self {
        Self { assembly: None }
    }

    /// Stores the assembly, replacing any previous one.
    ///
    /// Returns `false` when no assembly is given; the loader is then left unloaded and
    /// report generation will fail. An assembly without parts loads successfully.
    pub fn load(&mut self, assembly: Option<&'a Assembly>) -> bool {
        self.assembly = assembly;
        if assembly.is_none() {
            warn!("AssemblyLoader::load called without an assembly");
        }
        self.assembly.is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.assembly.is_some()
    }

    pub fn assembly(&self) -> Option<&'a Assembly> {
        self.assembly
    }

    /// Generates the report for the loaded assembly.
    ///
    /// Fails with [`ReportError::NotLoaded`] rather than producing an all-zero report,
    /// which would be indistinguishable from a massless vessel.
    pub fn generate_report(&self) -> Result<AirframeReport, ReportError> {
        let assembly = self.assembly.ok_or(ReportError::NotLoaded)?;
        Ok(generate_report(assembly))
    }
}
