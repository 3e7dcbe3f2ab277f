//! Typed inputs of one scenario and the versioned scenario file.

pub mod client;
pub mod investment;
pub mod pains;
pub mod parameters;
pub mod process;
pub mod targets;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::{self, ConsolidatedResult};
use crate::legacy::LegacyScenario;
use crate::validation::{self, ValidationErrors};

pub use client::{BurdenMultiplier, ClientProfile, CompanySize};
pub use investment::InvestmentRange;
pub use pains::SelectedPains;
pub use parameters::{normalize_fraction, DetailedParameters};
pub use process::CurrentProcess;
pub use targets::ReductionTargets;

/// The six inputs of one revised-model calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub pains: SelectedPains,
    pub client: ClientProfile,
    pub process: CurrentProcess,
    pub investment: InvestmentRange,
    #[serde(default)]
    pub targets: ReductionTargets,
    #[serde(default)]
    pub parameters: DetailedParameters,
}

impl Scenario {
    /// Validates, normalizes and calculates. The engine only ever sees the
    /// normalized copy.
    pub fn evaluate(&self) -> Result<ConsolidatedResult, ValidationErrors> {
        let valid = validation::validate(self)?;
        Ok(engine::calculate(
            &valid.client,
            &valid.process,
            &valid.pains,
            &valid.parameters,
            &valid.investment,
            &valid.targets,
        ))
    }
}

/// A scenario file tagged with the model version it was written for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ScenarioFile {
    /// Five pains, formulas F01..F18
    Revised(Scenario),
    /// Four categories CO/QL/SE/PR
    Legacy(LegacyScenario),
}

/// Scenario file loading/saving errors.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ScenarioFile {
    pub fn from_toml_str(src: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Reads a scenario TOML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioFile, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let scenario = ScenarioFile::from_toml_str(&content)?;
    tracing::debug!(path = %path.display(), "scenario loaded");
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &ScenarioFile) -> Result<(), ScenarioError> {
    fs::write(path, scenario.to_toml_string()?)?;
    Ok(())
}
