//! Static dispatch table: formula id → breakdown lines and evaluator.
//!
//! [`evaluate`] is an exhaustive `match`, so adding a formula without wiring
//! it here fails to compile.

use crate::derived::DerivedBases;
use crate::formula::FormulaId;
use crate::formulas::{hidden, labor, productivity, quality, safety, DEFAULT_TURNOVER_COST_FACTOR};
use crate::scenario::{CurrentProcess, DetailedParameters};

/// Everything a formula may read.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub process: &'a CurrentProcess,
    pub params: &'a DetailedParameters,
    pub bases: &'a DerivedBases,
}

/// Annual cost of one formula with its breakdown parts, aligned with
/// [`line_labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaValue {
    pub parts: Vec<f64>,
    pub total: f64,
}

impl FormulaValue {
    fn single(total: f64) -> Self {
        Self {
            parts: vec![total],
            total,
        }
    }
}

/// Breakdown line names of a formula. F05 and F12 are split into their
/// components; every other formula is one line named after itself.
pub fn line_labels(id: FormulaId) -> Vec<&'static str> {
    match id {
        FormulaId::F05 => vec!["Refugo", "Retrabalho"],
        FormulaId::F12 => vec!["Afastamentos", "Acidentes", "Risco Legal"],
        other => vec![other.label()],
    }
}

/// Optional inputs where zero means "not provided".
fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(fallback)
}

/// Evaluates one formula. `None` when a required parameter is missing.
///
/// Selection is the caller's concern; this only checks parameter presence.
pub fn evaluate(id: FormulaId, ctx: &EvalContext<'_>) -> Option<FormulaValue> {
    let p = ctx.process;
    let params = ctx.params;
    let b = ctx.bases;
    let burden = b.burden_multiplier;

    let value = match id {
        FormulaId::F01 => FormulaValue::single(labor::direct_labor(
            b.exposed_process_people,
            p.operator_salary,
            burden,
        )),
        FormulaId::F02 => FormulaValue::single(labor::overtime(
            b.exposed_process_people,
            params.f02.hours_per_person_month?,
            p.operator_salary,
            burden,
        )),
        FormulaId::F03 => {
            let f = &params.f03;
            FormulaValue::single(labor::learning_curve(labor::LearningCurveInput {
                hires_per_year: f.hires_per_year?,
                rookie_salary: positive_or(f.rookie_salary, p.operator_salary),
                burden_multiplier: burden,
                ramp_months: f.ramp_months?,
                supervisor_salary: positive_or(f.supervisor_salary, p.supervisor_salary),
                supervisor_time_share: f.supervisor_time_share?,
            }))
        }
        FormulaId::F04 => {
            let factor = positive_or(params.f04.cost_factor, DEFAULT_TURNOVER_COST_FACTOR);
            FormulaValue::single(labor::turnover(
                params.f04.departures_per_year?,
                p.operator_salary,
                factor,
            ))
        }
        FormulaId::F05 => {
            let f = &params.f05;
            let r = quality::scrap_and_rework(quality::ScrapReworkInput {
                monthly_production: b.monthly_production,
                scrap_rate: f.scrap_rate?,
                raw_material_cost_per_unit: p.raw_material_cost_per_unit,
                rework_rate: f.rework_rate?,
                rework_hours_per_unit: f.rework_hours_per_unit?,
                operator_hourly_cost: b.operator_hourly_cost,
            });
            FormulaValue {
                parts: vec![r.scrap, r.rework],
                total: r.total,
            }
        }
        FormulaId::F06 => FormulaValue::single(quality::manual_inspection(
            b.exposed_inspection_people,
            p.inspector_salary,
            burden,
        )),
        FormulaId::F07 => FormulaValue::single(quality::quality_escapes(
            params.f07.complaints_per_year?,
            params.f07.cost_per_complaint?,
        )),
        FormulaId::F08 => FormulaValue::single(productivity::opportunity_cost(
            p.monthly_line_revenue?,
            params.f08.unmet_demand_share?,
            params.f08.contribution_margin?,
        )),
        FormulaId::F09 => FormulaValue::single(productivity::silent_idleness(
            b.exposed_process_people,
            params.f09.idle_minutes_per_day?,
            b.operator_hourly_cost,
            p.operating_days_per_year,
        )),
        FormulaId::F10 => {
            let f = &params.f10;
            FormulaValue::single(productivity::line_stoppages(
                f.stoppages_per_month?,
                f.hours_per_stoppage?,
                productivity::effective_downtime_cost(f.downtime_cost_per_hour, b.downtime_hourly_cost),
            ))
        }
        FormulaId::F11 => {
            let f = &params.f11;
            FormulaValue::single(productivity::setup_changeover(
                f.setups_per_month?,
                f.hours_per_setup?,
                productivity::effective_downtime_cost(f.downtime_cost_per_hour, b.downtime_hourly_cost),
            ))
        }
        FormulaId::F12 => {
            let f = &params.f12;
            let r = safety::accident_risk(safety::AccidentRiskInput {
                leaves_per_year: f.leaves_per_year?,
                cost_per_leave: f.cost_per_leave?,
                injuries_per_year: f.injuries_per_year?,
                cost_per_injury: f.cost_per_injury?,
                lawsuit_probability: f.lawsuit_probability?,
                lawsuit_cost: f.lawsuit_cost?,
            });
            FormulaValue {
                parts: vec![r.leave, r.injury, r.legal],
                total: r.total,
            }
        }
        FormulaId::F13 => {
            let f = &params.f13;
            FormulaValue::single(safety::forklift_fleet(safety::ForkliftFleetInput {
                fleet_size: f.fleet_size?,
                operator_cost_month: f.operator_cost_month?,
                equipment_cost_month: f.equipment_cost_month?,
                energy_cost_month: f.energy_cost_month?,
                maintenance_cost_month: f.maintenance_cost_month?,
            }))
        }
        FormulaId::F14 => {
            let f = &params.f14;
            FormulaValue::single(hidden::supervision(
                f.supervisors_per_shift? * f64::from(p.shifts_per_day),
                positive_or(f.supervisor_salary, p.supervisor_salary),
                burden,
            ))
        }
        FormulaId::F15 => FormulaValue::single(hidden::compliance_ppe(
            b.exposed_process_people,
            params.f15.ppe_cost_per_person_year?,
            params.f15.exams_cost_per_person_year?,
        )),
        FormulaId::F16 => FormulaValue::single(hidden::energy_utilities(
            params.f16.area_m2?,
            params.f16.energy_cost_per_m2_year?,
        )),
        FormulaId::F17 => FormulaValue::single(hidden::physical_space(
            params.f17.area_m2?,
            params.f17.cost_per_m2_year?,
            params.f17.reduction_share?,
        )),
        FormulaId::F18 => FormulaValue::single(hidden::data_management(
            params.f18.people_involved?,
            params.f18.hours_per_day?,
            b.operator_hourly_cost,
            p.operating_days_per_year,
        )),
    };
    debug_assert_eq!(value.parts.len(), line_labels(id).len());
    Some(value)
}
