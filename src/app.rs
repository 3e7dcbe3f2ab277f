use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::areas;
use crate::config::{self, Config, ConfigError};
use crate::formula::FormulaId;
use crate::i18n::{self, keys, Translator};
use crate::legacy;
use crate::scenario::{
    self, ClientProfile, CurrentProcess, DetailedParameters, InvestmentRange, ReductionTargets,
    Scenario, ScenarioError, ScenarioFile, SelectedPains,
};
use crate::ui_cli;

/// Cost-of-inaction and ROI calculator for industrial automation projects.
#[derive(Parser, Debug)]
#[command(name = "automation_roi", version)]
pub struct Cli {
    /// Output language: auto, pt-br or en
    #[arg(long, global = true, default_value = "auto")]
    pub lang: String,

    /// Settings file (created with defaults when missing)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a scenario file and print the cost report
    Calculate {
        file: PathBuf,
        /// Also write the result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Only validate a scenario file
    Validate { file: PathBuf },
    /// Write a scenario template
    Template {
        /// Pre-select the formulas of an automation area
        #[arg(long)]
        area: Option<String>,
        /// Destination file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List automation areas and their formulas
    Areas,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("failed to export result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown area: {0}")]
    UnknownArea(String),
}

/// Runs one CLI command. Validation failures print the error list and yield
/// exit code 1.
pub fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let cfg = match &cli.config {
        Some(path) => config::load_or_default_at(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());
    tracing::debug!(lang = tr.language_code(), "translator ready");

    match &cli.command {
        Command::Calculate { file, json } => calculate(file, json.as_deref(), &cfg, &tr),
        Command::Validate { file } => validate(file, &tr),
        Command::Template { area, out } => {
            template(area.as_deref(), out.as_deref(), &cfg, &tr)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Areas => {
            print!("{}", ui_cli::render_areas(&tr));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calculate(file: &Path, json: Option<&Path>, cfg: &Config, tr: &Translator) -> Result<ExitCode, AppError> {
    let outcome = match scenario::load_scenario(file)? {
        ScenarioFile::Revised(s) => s.evaluate().map(|result| {
            print!("{}", ui_cli::render_result(&result, &s.client, tr, &cfg.currency_symbol));
            serde_json::to_string_pretty(&result)
        }),
        ScenarioFile::Legacy(s) => legacy::validate_legacy(&s).map(|valid| {
            let result = legacy::calculate_legacy(&valid, &cfg.legacy);
            print!(
                "{}",
                ui_cli::render_legacy_result(&result, &valid.client, tr, &cfg.currency_symbol)
            );
            serde_json::to_string_pretty(&result)
        }),
    };

    match outcome {
        Ok(exported) => {
            let exported = exported?;
            if let Some(path) = json {
                fs::write(path, exported)?;
                println!("{} {}", tr.t(keys::JSON_WRITTEN), path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            eprint!("{}", ui_cli::render_validation_errors(&errors, tr));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn validate(file: &Path, tr: &Translator) -> Result<ExitCode, AppError> {
    let checked = match scenario::load_scenario(file)? {
        ScenarioFile::Revised(s) => crate::validation::validate(&s).map(|_| ()),
        ScenarioFile::Legacy(s) => legacy::validate_legacy(&s).map(|_| ()),
    };
    match checked {
        Ok(()) => {
            println!("{}", tr.t(keys::VALIDATION_OK));
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            eprint!("{}", ui_cli::render_validation_errors(&errors, tr));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Revised-model scenario pre-filled from config and, optionally, an area preset.
pub fn template_scenario(area: Option<&str>, cfg: &Config) -> Result<Scenario, AppError> {
    let preset = area
        .map(|key| areas::find(key).ok_or_else(|| AppError::UnknownArea(key.to_string())))
        .transpose()?;
    let defaults = &cfg.template;

    let pains: SelectedPains = preset
        .map(|p| p.formulas.iter().copied().collect())
        .unwrap_or_default();
    let targets: ReductionTargets = pains
        .iter()
        .map(|id: FormulaId| (id, defaults.reduction_target))
        .collect();

    Ok(Scenario {
        pains,
        client: ClientProfile {
            client_name: "Cliente".to_string(),
            project_name: "Projeto".to_string(),
            sector: preset.map_or("geral", |p| p.key).to_string(),
            company_size: "medium".to_string(),
            burden_multiplier: defaults.burden_multiplier,
        },
        process: CurrentProcess {
            production_rate_per_min: Some(0.0),
            monthly_volume: None,
            shift_hours: defaults.shift_hours,
            shifts_per_day: defaults.shifts_per_day,
            operating_days_per_year: defaults.operating_days_per_year,
            process_people_per_shift: 1,
            inspection_people_per_shift: 0,
            operator_salary: defaults.operator_salary,
            inspector_salary: defaults.inspector_salary,
            supervisor_salary: defaults.supervisor_salary,
            raw_material_cost_per_unit: 0.0,
            unit_cost: 0.0,
            monthly_line_revenue: None,
        },
        investment: InvestmentRange::new(0.0, 0.0),
        targets,
        parameters: DetailedParameters::default(),
    })
}

fn template(area: Option<&str>, out: Option<&Path>, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let file = ScenarioFile::Revised(template_scenario(area, cfg)?);
    match out {
        Some(path) => {
            scenario::save_scenario(path, &file)?;
            println!("{} {}", tr.t(keys::TEMPLATE_WRITTEN), path.display());
        }
        None => print!("{}", file.to_toml_string()?),
    }
    Ok(())
}
