//! Scenario document - the on-disk shape of a decision scenario.
//!
//! ```yaml
//! criteria:
//!   - { name: salary, weight: 0.6, maximize: true }
//!   - { name: commute, weight: 0.4, maximize: false }
//! options:
//!   - name: Job A
//!     description: Downtown office
//!     outcomes:
//!       salary: { best: 100, expected: 90, worst: 70 }
//!       commute: { best: 45, expected: 30, worst: 20 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::decision::{Criterion, DecisionOption, OptionEvaluation, Outcome, Scenario};
use crate::domain::foundation::AnalysisError;

/// Serialization format of a scenario document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Picks the format from the file extension. Anything other than
    /// `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// One option with its outcomes, flattened for hand editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub outcomes: HashMap<String, Outcome>,
}

impl OptionDocument {
    fn into_evaluation(self) -> OptionEvaluation {
        let option = match self.description {
            Some(description) => DecisionOption::with_description(self.name, description),
            None => DecisionOption::new(self.name),
        };
        OptionEvaluation::new(option, self.outcomes)
    }
}

/// Top-level scenario document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioDocument {
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub options: Vec<OptionDocument>,
}

impl ScenarioDocument {
    /// Parses a document in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, AnalysisError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(text)
                .map_err(|e| AnalysisError::ScenarioFormat(e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(text)
                .map_err(|e| AnalysisError::ScenarioFormat(e.to_string())),
        }
    }

    /// Converts into a validated scenario.
    ///
    /// # Errors
    ///
    /// `InvalidCriterionWeight` or `InvalidOutcomeOrdering` if any value
    /// object fails validation.
    pub fn into_scenario(self) -> Result<Scenario, AnalysisError> {
        let options = self
            .options
            .into_iter()
            .map(OptionDocument::into_evaluation)
            .collect();
        let scenario = Scenario::new(self.criteria, options);
        scenario.validate()?;
        Ok(scenario)
    }
}
