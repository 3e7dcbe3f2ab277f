use crate::formulas::{annual_production, exposed_people, indicators};
use crate::validation::{self, ValidationError, ValidationErrors};

use super::formulas;
use super::model::{
    LegacyCategory, LegacyCategoryResult, LegacyConstants, LegacyItem, LegacyLine, LegacyParameters,
    LegacyProcess, LegacyResult, LegacyScenario, LegacyTargets,
};

/// Quantities shared by the legacy formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyBases {
    pub annual_production: f64,
    pub exposed_process_people: u32,
    pub material_cost_per_unit: f64,
    pub hourly_cost: f64,
    pub absentee_day_cost: f64,
    pub termination_cost: f64,
    pub legal_provision: f64,
}

pub fn legacy_bases(process: &LegacyProcess, constants: &LegacyConstants) -> LegacyBases {
    LegacyBases {
        annual_production: annual_production(
            process.production_rate_per_min,
            process.shift_hours,
            process.shifts_per_day,
            process.operating_days_per_year,
        ),
        exposed_process_people: exposed_people(process.process_people_per_shift, process.shifts_per_day),
        material_cost_per_unit: formulas::material_cost(process.unit_cost, process.material_fraction),
        hourly_cost: formulas::hourly_cost(constants.salary, constants.hours_per_month),
        absentee_day_cost: if process.operating_days_per_year == 0 {
            0.0
        } else {
            formulas::absentee_day_cost(constants.salary, process.operating_days_per_year)
        },
        termination_cost: constants.salary * constants.termination_factor,
        legal_provision: constants.salary * constants.legal_provision_factor,
    }
}

/// Evaluates one legacy item. `None` when an input it needs is missing.
fn evaluate_item(
    item: LegacyItem,
    process: &LegacyProcess,
    params: &LegacyParameters,
    bases: &LegacyBases,
    k: &LegacyConstants,
) -> Option<f64> {
    let (co, ql, se, pr) = (&params.co, &params.ql, &params.se, &params.pr);
    let value = match item {
        LegacyItem::Co1 => formulas::payroll(process.process_people_per_shift, k.salary, process.shifts_per_day),
        LegacyItem::Co2 => formulas::outsourcing(
            co.outsourced_volume_per_month?,
            co.outsourced_unit_cost?,
            co.outsourced_months?,
        ),
        LegacyItem::Co3 => {
            formulas::material_waste(bases.annual_production, co.waste_rate?, bases.material_cost_per_unit)
        }
        LegacyItem::Co4 => formulas::corrective_maintenance(
            co.stoppages_per_month?,
            co.minutes_per_stoppage?,
            k.downtime_cost_per_hour,
        ),
        LegacyItem::Ql1 => formulas::rework(
            bases.annual_production,
            ql.rework_rate?,
            process.unit_cost,
            ql.rework_factor?,
        ),
        LegacyItem::Ql2 => formulas::scrap(bases.annual_production, ql.scrap_rate?, process.unit_cost),
        LegacyItem::Ql3 => formulas::inspection(process.inspection_people_per_shift, k.salary, process.shifts_per_day),
        LegacyItem::Ql4 => formulas::reverse_logistics(
            bases.annual_production,
            ql.return_rate?,
            k.reverse_logistics_cost_per_unit,
        ),
        LegacyItem::Ql5 => formulas::occurrences(ql.fines_per_year?, k.quality_fine),
        LegacyItem::Se1 => formulas::absenteeism(se.absentee_days_per_year?, bases.absentee_day_cost),
        LegacyItem::Se2 => formulas::turnover(se.departures_per_year?, bases.termination_cost),
        LegacyItem::Se3 => formulas::recurring_training(se.departures_per_year?, k.training_cost),
        LegacyItem::Se4 => formulas::occurrences(se.lawsuits_per_year?, bases.legal_provision),
        LegacyItem::Pr1 => formulas::overtime(
            pr.overtime_hours_per_person_month? * f64::from(bases.exposed_process_people),
            bases.hourly_cost,
            k.overtime_factor,
        ),
        LegacyItem::Pr2 => formulas::extra_headcount(pr.extra_headcount?, k.salary),
        LegacyItem::Pr3 => formulas::lost_sales(pr.unmet_demand_per_month?, pr.margin_per_unit?),
        LegacyItem::Pr4 => formulas::occurrences(pr.delay_fines_per_year?, k.delay_fine),
    };
    Some(value)
}

/// Legacy-model calculation on already validated inputs.
pub fn calculate_legacy(scenario: &LegacyScenario, constants: &LegacyConstants) -> LegacyResult {
    let bases = legacy_bases(&scenario.process, constants);

    let mut categories: Vec<LegacyCategoryResult> = LegacyCategory::ALL
        .into_iter()
        .map(|category| LegacyCategoryResult {
            category,
            subtotal: 0.0,
            lines: Vec::new(),
        })
        .collect();
    let mut total_annual_gain = 0.0;

    for item in LegacyItem::ALL {
        let value = if scenario.pains.is_selected(item) {
            evaluate_item(item, &scenario.process, &scenario.parameters, &bases, constants).unwrap_or(0.0)
        } else {
            0.0
        };
        tracing::debug!(item = %item, value, "legacy item");
        total_annual_gain += indicators::annual_gain(value, scenario.targets.get(item));
        categories[item.category().index()].lines.push(LegacyLine {
            item,
            label: format!("{} - {}", item.code(), item.label()),
            value,
        });
    }

    for category in &mut categories {
        category.subtotal = category.lines.iter().map(|l| l.value).sum();
    }
    let total_annual_cost = categories.iter().map(|c| c.subtotal).sum();
    let average_investment = scenario.investment.average();

    LegacyResult {
        categories,
        total_annual_cost,
        total_annual_gain,
        average_investment,
        payback_years: indicators::payback_years(average_investment, total_annual_gain),
        roi_1_year: indicators::roi_percent(average_investment, total_annual_gain, 1),
        roi_3_years: indicators::roi_percent(average_investment, total_annual_gain, 3),
        roi_5_years: indicators::roi_percent(average_investment, total_annual_gain, 5),
    }
}

/// Validates a legacy scenario and returns its normalized copy.
pub fn validate_legacy(scenario: &LegacyScenario) -> Result<LegacyScenario, ValidationErrors> {
    let parameters = scenario.parameters.normalized();
    let targets = scenario.targets.normalized();
    let mut errors = Vec::new();

    let client = &scenario.client;
    for (field, value) in [
        ("client name", &client.client_name),
        ("project name", &client.project_name),
        ("sector", &client.sector),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::MissingText { field });
        }
    }

    let p = &scenario.process;
    if !(p.production_rate_per_min > 0.0) {
        errors.push(ValidationError::MissingProductionSignal);
    }
    validation::check_range(&mut errors, "shift hours", p.shift_hours, 1.0, 24.0);
    validation::check_range(&mut errors, "shifts per day", f64::from(p.shifts_per_day), 1.0, 3.0);
    validation::check_range(
        &mut errors,
        "operating days per year",
        f64::from(p.operating_days_per_year),
        1.0,
        365.0,
    );
    if p.process_people_per_shift < 1 {
        errors.push(ValidationError::NoProcessOperators);
    }
    validation::check_headcount(
        &mut errors,
        p.process_people_per_shift,
        p.inspection_people_per_shift,
    );
    validation::check_non_negative(&mut errors, "unit cost", p.unit_cost);
    validation::check_range(&mut errors, "material fraction", p.material_fraction, 0.0, 1.0);

    errors.extend(validation::validate_investment(&scenario.investment));
    errors.extend(check_parameters(&parameters, scenario));
    errors.extend(check_targets(&targets));

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }
    Ok(LegacyScenario {
        parameters,
        targets,
        ..scenario.clone()
    })
}

fn check_parameters(params: &LegacyParameters, scenario: &LegacyScenario) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let (co, ql, se, pr) = (&params.co, &params.ql, &params.se, &params.pr);

    for item in scenario.pains.iter() {
        // (field, value, upper bound)
        let fields: Vec<(&'static str, Option<f64>, f64)> = match item {
            LegacyItem::Co1 | LegacyItem::Ql3 => vec![],
            LegacyItem::Co2 => vec![
                ("co.outsourced_volume_per_month", co.outsourced_volume_per_month, f64::INFINITY),
                ("co.outsourced_unit_cost", co.outsourced_unit_cost, f64::INFINITY),
                ("co.outsourced_months", co.outsourced_months, 12.0),
            ],
            LegacyItem::Co3 => vec![("co.waste_rate", co.waste_rate, 1.0)],
            LegacyItem::Co4 => vec![
                ("co.stoppages_per_month", co.stoppages_per_month, f64::INFINITY),
                ("co.minutes_per_stoppage", co.minutes_per_stoppage, f64::INFINITY),
            ],
            LegacyItem::Ql1 => vec![
                ("ql.rework_rate", ql.rework_rate, 1.0),
                ("ql.rework_factor", ql.rework_factor, f64::INFINITY),
            ],
            LegacyItem::Ql2 => vec![("ql.scrap_rate", ql.scrap_rate, 1.0)],
            LegacyItem::Ql4 => vec![("ql.return_rate", ql.return_rate, 1.0)],
            LegacyItem::Ql5 => vec![("ql.fines_per_year", ql.fines_per_year, f64::INFINITY)],
            LegacyItem::Se1 => vec![("se.absentee_days_per_year", se.absentee_days_per_year, f64::INFINITY)],
            LegacyItem::Se2 | LegacyItem::Se3 => {
                vec![("se.departures_per_year", se.departures_per_year, f64::INFINITY)]
            }
            LegacyItem::Se4 => vec![("se.lawsuits_per_year", se.lawsuits_per_year, f64::INFINITY)],
            LegacyItem::Pr1 => vec![(
                "pr.overtime_hours_per_person_month",
                pr.overtime_hours_per_person_month,
                f64::INFINITY,
            )],
            LegacyItem::Pr2 => vec![("pr.extra_headcount", pr.extra_headcount, f64::INFINITY)],
            LegacyItem::Pr3 => vec![
                ("pr.unmet_demand_per_month", pr.unmet_demand_per_month, f64::INFINITY),
                ("pr.margin_per_unit", pr.margin_per_unit, f64::INFINITY),
            ],
            LegacyItem::Pr4 => vec![("pr.delay_fines_per_year", pr.delay_fines_per_year, f64::INFINITY)],
        };

        for (field, value, max) in fields {
            match value {
                None => errors.push(ValidationError::MissingLegacyParameter { item, field }),
                Some(v) if !(v >= 0.0 && v <= max) => {
                    errors.push(ValidationError::LegacyParameterOutOfRange { item, field, value: v })
                }
                Some(_) => {}
            }
        }
    }
    errors
}

fn check_targets(targets: &LegacyTargets) -> Vec<ValidationError> {
    targets
        .iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(item, value)| ValidationError::LegacyTargetOutOfRange { item, value })
        .collect()
}
