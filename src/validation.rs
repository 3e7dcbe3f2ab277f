//! Input validation run before any calculation.
//!
//! Validators never panic on bad input and never mutate it: fraction fields
//! are checked on a normalized copy, and [`validate`] hands that copy back.

use crate::formula::FormulaId;
use crate::legacy::LegacyItem;
use crate::scenario::{
    BurdenMultiplier, ClientProfile, CurrentProcess, DetailedParameters,
    InvestmentRange, ReductionTargets, Scenario, SelectedPains,
};

/// Upper bound on any per-shift headcount.
pub const MAX_PEOPLE_PER_SHIFT: u32 = 100_000;

/// One user-correctable problem with the inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingText { field: &'static str },
    #[error("company size must be small, medium or large (got \"{0}\")")]
    InvalidCompanySize(String),
    #[error("burden multiplier must be 1.7, 1.85 or 2.0 (got {0})")]
    InvalidBurdenMultiplier(f64),
    #[error("a production rate (> 0) or a monthly volume (> 0) is required")]
    MissingProductionSignal,
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("at least one person per shift must work on the process")]
    NoProcessOperators,
    #[error("{field} investment must be greater than zero")]
    InvestmentNotPositive { field: &'static str },
    #[error("minimum investment ({min}) cannot exceed maximum investment ({max})")]
    InvestmentInverted { min: f64, max: f64 },
    #[error("{formula}: {field} is required")]
    MissingParameter {
        formula: FormulaId,
        field: &'static str,
    },
    #[error("{formula}: {field} cannot be negative (got {value})")]
    NegativeParameter {
        formula: FormulaId,
        field: &'static str,
        value: f64,
    },
    #[error("{formula}: {field} must be between 0% and 100% (got {value})")]
    FractionOutOfRange {
        formula: FormulaId,
        field: &'static str,
        value: f64,
    },
    #[error("{0}: monthly line revenue is required, otherwise the formula evaluates to zero")]
    MissingRevenue(FormulaId),
    #[error("{0}: provide the monthly line revenue or a downtime cost per hour (> 0)")]
    MissingDowntimeCost(FormulaId),
    #[error("{formula}: reduction target must be between 0% and 100% (got {value})")]
    TargetOutOfRange { formula: FormulaId, value: f64 },
    #[error("{item}: {field} is required")]
    MissingLegacyParameter {
        item: LegacyItem,
        field: &'static str,
    },
    #[error("{item}: {field} is out of range (got {value})")]
    LegacyParameterOutOfRange {
        item: LegacyItem,
        field: &'static str,
        value: f64,
    },
    #[error("{item}: reduction target must be between 0% and 100% (got {value})")]
    LegacyTargetOutOfRange { item: LegacyItem, value: f64 },
}

/// Non-empty list of validation problems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} validation error(s): {}", .0.len(), join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Human-readable messages, one per problem.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

/// Validates the whole scenario and returns its normalized copy.
pub fn validate(scenario: &Scenario) -> Result<Scenario, ValidationErrors> {
    let parameters = scenario.parameters.normalized();
    let targets = scenario.targets.normalized();

    let mut errors = validate_client(&scenario.client);
    errors.extend(validate_process(&scenario.process));
    errors.extend(validate_investment(&scenario.investment));
    errors.extend(validate_parameters(&parameters, &scenario.pains, &scenario.process));
    errors.extend(validate_targets(&targets));

    if !errors.is_empty() {
        tracing::info!(count = errors.len(), "scenario rejected by validation");
        return Err(ValidationErrors(errors));
    }
    Ok(Scenario {
        parameters,
        targets,
        ..scenario.clone()
    })
}

pub fn validate_client(client: &ClientProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (field, value) in [
        ("client name", &client.client_name),
        ("project name", &client.project_name),
        ("sector", &client.sector),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::MissingText { field });
        }
    }
    if client.size().is_none() {
        errors.push(ValidationError::InvalidCompanySize(client.company_size.clone()));
    }
    if BurdenMultiplier::from_value(client.burden_multiplier).is_none() {
        errors.push(ValidationError::InvalidBurdenMultiplier(client.burden_multiplier));
    }
    errors
}

pub fn validate_process(process: &CurrentProcess) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !process.has_production_signal() {
        errors.push(ValidationError::MissingProductionSignal);
    }
    check_range(&mut errors, "shift hours", process.shift_hours, 1.0, 24.0);
    check_range(
        &mut errors,
        "shifts per day",
        f64::from(process.shifts_per_day),
        1.0,
        3.0,
    );
    check_range(
        &mut errors,
        "operating days per year",
        f64::from(process.operating_days_per_year),
        1.0,
        365.0,
    );
    if process.process_people_per_shift < 1 {
        errors.push(ValidationError::NoProcessOperators);
    }
    check_headcount(
        &mut errors,
        process.process_people_per_shift,
        process.inspection_people_per_shift,
    );

    for (field, value) in [
        ("operator salary", process.operator_salary),
        ("inspector salary", process.inspector_salary),
        ("supervisor salary", process.supervisor_salary),
        ("raw material cost per unit", process.raw_material_cost_per_unit),
        ("unit cost", process.unit_cost),
    ] {
        check_non_negative(&mut errors, field, value);
    }
    for (field, value) in [
        ("production rate", process.production_rate_per_min),
        ("monthly volume", process.monthly_volume),
        ("monthly line revenue", process.monthly_line_revenue),
    ] {
        if let Some(value) = value {
            check_non_negative(&mut errors, field, value);
        }
    }
    errors
}

pub fn validate_investment(investment: &InvestmentRange) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !(investment.min > 0.0) {
        errors.push(ValidationError::InvestmentNotPositive { field: "minimum" });
    }
    if !(investment.max > 0.0) {
        errors.push(ValidationError::InvestmentNotPositive { field: "maximum" });
    }
    if investment.min > investment.max {
        errors.push(ValidationError::InvestmentInverted {
            min: investment.min,
            max: investment.max,
        });
    }
    errors
}

/// Checks formula parameters, only for selected formulas.
///
/// `params` is expected to be normalized already (see
/// [`DetailedParameters::normalized`]); fraction fields outside 0..1 are errors.
pub fn validate_parameters(
    params: &DetailedParameters,
    pains: &SelectedPains,
    process: &CurrentProcess,
) -> Vec<ValidationError> {
    let mut checks = ParamChecks::default();

    for id in pains.iter() {
        let mut c = checks.formula(id);
        match id {
            FormulaId::F01 | FormulaId::F06 => {}
            FormulaId::F02 => {
                c.required("f02.hours_per_person_month", params.f02.hours_per_person_month);
            }
            FormulaId::F03 => {
                let p = &params.f03;
                c.required("f03.hires_per_year", p.hires_per_year);
                c.required("f03.rookie_salary", p.rookie_salary);
                c.required("f03.ramp_months", p.ramp_months);
                c.required_fraction("f03.supervisor_time_share", p.supervisor_time_share);
                c.optional("f03.supervisor_salary", p.supervisor_salary);
            }
            FormulaId::F04 => {
                c.required("f04.departures_per_year", params.f04.departures_per_year);
                c.optional("f04.cost_factor", params.f04.cost_factor);
            }
            FormulaId::F05 => {
                let p = &params.f05;
                c.required_fraction("f05.scrap_rate", p.scrap_rate);
                c.required_fraction("f05.rework_rate", p.rework_rate);
                c.required("f05.rework_hours_per_unit", p.rework_hours_per_unit);
            }
            FormulaId::F07 => {
                c.required("f07.complaints_per_year", params.f07.complaints_per_year);
                c.required("f07.cost_per_complaint", params.f07.cost_per_complaint);
            }
            FormulaId::F08 => {
                c.required_fraction("f08.unmet_demand_share", params.f08.unmet_demand_share);
                c.required_fraction("f08.contribution_margin", params.f08.contribution_margin);
                if !process.has_revenue() {
                    c.push(ValidationError::MissingRevenue(id));
                }
            }
            FormulaId::F09 => {
                c.required("f09.idle_minutes_per_day", params.f09.idle_minutes_per_day);
            }
            FormulaId::F10 => {
                let p = &params.f10;
                c.required("f10.stoppages_per_month", p.stoppages_per_month);
                c.required("f10.hours_per_stoppage", p.hours_per_stoppage);
                c.optional("f10.downtime_cost_per_hour", p.downtime_cost_per_hour);
                c.downtime_cost(process, p.downtime_cost_per_hour);
            }
            FormulaId::F11 => {
                let p = &params.f11;
                c.required("f11.setups_per_month", p.setups_per_month);
                c.required("f11.hours_per_setup", p.hours_per_setup);
                c.optional("f11.downtime_cost_per_hour", p.downtime_cost_per_hour);
                c.downtime_cost(process, p.downtime_cost_per_hour);
            }
            FormulaId::F12 => {
                let p = &params.f12;
                c.required("f12.leaves_per_year", p.leaves_per_year);
                c.required("f12.cost_per_leave", p.cost_per_leave);
                c.required("f12.injuries_per_year", p.injuries_per_year);
                c.required("f12.cost_per_injury", p.cost_per_injury);
                c.required_fraction("f12.lawsuit_probability", p.lawsuit_probability);
                c.required("f12.lawsuit_cost", p.lawsuit_cost);
            }
            FormulaId::F13 => {
                let p = &params.f13;
                c.required("f13.fleet_size", p.fleet_size);
                c.required("f13.operator_cost_month", p.operator_cost_month);
                c.required("f13.equipment_cost_month", p.equipment_cost_month);
                c.required("f13.energy_cost_month", p.energy_cost_month);
                c.required("f13.maintenance_cost_month", p.maintenance_cost_month);
            }
            FormulaId::F14 => {
                // zero supervisors is a valid answer, so nothing is required here
                c.optional("f14.supervisors_per_shift", params.f14.supervisors_per_shift);
                c.optional("f14.supervisor_salary", params.f14.supervisor_salary);
            }
            FormulaId::F15 => {
                let p = &params.f15;
                c.required("f15.ppe_cost_per_person_year", p.ppe_cost_per_person_year);
                c.required("f15.exams_cost_per_person_year", p.exams_cost_per_person_year);
            }
            FormulaId::F16 => {
                c.required("f16.area_m2", params.f16.area_m2);
                c.required("f16.energy_cost_per_m2_year", params.f16.energy_cost_per_m2_year);
            }
            FormulaId::F17 => {
                let p = &params.f17;
                c.required("f17.area_m2", p.area_m2);
                c.required("f17.cost_per_m2_year", p.cost_per_m2_year);
                c.required_fraction("f17.reduction_share", p.reduction_share);
            }
            FormulaId::F18 => {
                c.required("f18.people_involved", params.f18.people_involved);
                c.required("f18.hours_per_day", params.f18.hours_per_day);
            }
        }
    }
    checks.errors
}

/// Checks normalized reduction targets lie in 0..1.
pub fn validate_targets(targets: &ReductionTargets) -> Vec<ValidationError> {
    targets
        .iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(formula, value)| ValidationError::TargetOutOfRange { formula, value })
        .collect()
}

pub(crate) fn check_range(errors: &mut Vec<ValidationError>, field: &'static str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

pub(crate) fn check_headcount(
    errors: &mut Vec<ValidationError>,
    process_people: u32,
    inspection_people: u32,
) {
    for (field, people) in [
        ("process people per shift", process_people),
        ("inspection people per shift", inspection_people),
    ] {
        if people > MAX_PEOPLE_PER_SHIFT {
            errors.push(ValidationError::OutOfRange {
                field,
                value: f64::from(people),
                min: 0.0,
                max: f64::from(MAX_PEOPLE_PER_SHIFT),
            });
        }
    }
}

pub(crate) fn check_non_negative(errors: &mut Vec<ValidationError>, field: &'static str, value: f64) {
    if !(value >= 0.0) || !value.is_finite() {
        errors.push(ValidationError::Negative { field, value });
    }
}

#[derive(Default)]
struct ParamChecks {
    errors: Vec<ValidationError>,
}

impl ParamChecks {
    fn formula(&mut self, formula: FormulaId) -> FormulaChecks<'_> {
        FormulaChecks {
            formula,
            errors: &mut self.errors,
        }
    }
}

struct FormulaChecks<'a> {
    formula: FormulaId,
    errors: &'a mut Vec<ValidationError>,
}

impl FormulaChecks<'_> {
    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn required(&mut self, field: &'static str, value: Option<f64>) {
        match value {
            None => self.push(ValidationError::MissingParameter {
                formula: self.formula,
                field,
            }),
            Some(v) => self.non_negative(field, v),
        }
    }

    fn optional(&mut self, field: &'static str, value: Option<f64>) {
        if let Some(v) = value {
            self.non_negative(field, v);
        }
    }

    fn required_fraction(&mut self, field: &'static str, value: Option<f64>) {
        match value {
            None => self.push(ValidationError::MissingParameter {
                formula: self.formula,
                field,
            }),
            Some(v) if !(0.0..=1.0).contains(&v) => self.push(ValidationError::FractionOutOfRange {
                formula: self.formula,
                field,
                value: v,
            }),
            Some(_) => {}
        }
    }

    fn non_negative(&mut self, field: &'static str, value: f64) {
        if !(value >= 0.0) || !value.is_finite() {
            self.push(ValidationError::NegativeParameter {
                formula: self.formula,
                field,
                value,
            });
        }
    }

    /// F10/F11 evaluate to zero without revenue or a positive override.
    fn downtime_cost(&mut self, process: &CurrentProcess, override_cost: Option<f64>) {
        if !process.has_revenue() && !override_cost.is_some_and(|c| c > 0.0) {
            self.push(ValidationError::MissingDowntimeCost(self.formula));
        }
    }
}
