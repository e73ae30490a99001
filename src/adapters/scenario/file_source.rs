//! Filesystem scenario source.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{DocumentFormat, ScenarioDocument};
use crate::domain::decision::Scenario;
use crate::domain::foundation::AnalysisError;
use crate::ports::ScenarioSource;

/// Reads a scenario document from a file on every `load`.
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
#[derive(Debug, Clone)]
pub struct FileScenarioSource {
    path: PathBuf,
}

impl FileScenarioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScenarioSource for FileScenarioSource {
    fn load(&self) -> Result<Scenario, AnalysisError> {
        let text = fs::read_to_string(&self.path).map_err(|source| AnalysisError::ScenarioIo {
            path: self.path.display().to_string(),
            source,
        })?;

        let format = DocumentFormat::from_path(&self.path);
        let scenario = ScenarioDocument::parse(&text, format)?.into_scenario()?;

        debug!(
            path = %self.path.display(),
            criteria = scenario.criteria().len(),
            options = scenario.options().len(),
            "Scenario loaded"
        );

        Ok(scenario)
    }
}
