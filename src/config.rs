use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::legacy::LegacyConstants;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Values pre-filled into new scenario templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDefaults {
    pub shift_hours: f64,
    pub shifts_per_day: u32,
    pub operating_days_per_year: u32,
    pub operator_salary: f64,
    pub inspector_salary: f64,
    pub supervisor_salary: f64,
    pub burden_multiplier: f64,
    /// Reduction target applied to every pre-selected formula (0..1)
    pub reduction_target: f64,
}

impl Default for TemplateDefaults {
    fn default() -> Self {
        Self {
            shift_hours: 8.0,
            shifts_per_day: 2,
            operating_days_per_year: 250,
            operator_salary: 2500.0,
            inspector_salary: 3000.0,
            supervisor_salary: 5000.0,
            burden_multiplier: 1.7,
            reduction_target: 0.5,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `pt-br` or `en`
    pub language: String,
    pub currency_symbol: String,
    /// Directory with `<lang>.toml` string overrides
    pub locale_dir: Option<String>,
    pub template: TemplateDefaults,
    pub legacy: LegacyConstants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            currency_symbol: "R$".to_string(),
            locale_dir: None,
            template: TemplateDefaults::default(),
            legacy: LegacyConstants::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads `config.toml` from the working directory, creating it with
/// defaults when missing.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_FILE))
}

pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
