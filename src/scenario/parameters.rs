//! Formula-specific inputs.
//!
//! Every field is optional. A field is only required when its formula is
//! selected; the validation layer enforces that, the types do not.

use serde::{Deserialize, Serialize};

/// Converts a whole-percent value (1, 100] to a fraction. Anything else is
/// returned untouched, so applying it twice is harmless.
pub fn normalize_fraction(value: f64) -> f64 {
    if value > 1.0 && value <= 100.0 {
        value / 100.0
    } else {
        value
    }
}

/// F02 recurring overtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeParams {
    pub hours_per_person_month: Option<f64>,
}

/// F03 learning curve of new hires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningCurveParams {
    pub hires_per_year: Option<f64>,
    pub rookie_salary: Option<f64>,
    pub ramp_months: Option<f64>,
    /// Falls back to the process supervisor salary
    pub supervisor_salary: Option<f64>,
    /// Fraction
    pub supervisor_time_share: Option<f64>,
}

/// F04 turnover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnoverParams {
    pub departures_per_year: Option<f64>,
    /// Turnover cost as a multiple of salary, 1.5 when absent or zero
    pub cost_factor: Option<f64>,
}

/// F05 scrap and rework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapReworkParams {
    /// Fraction
    pub scrap_rate: Option<f64>,
    /// Fraction
    pub rework_rate: Option<f64>,
    pub rework_hours_per_unit: Option<f64>,
}

/// F07 quality escapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityEscapeParams {
    pub complaints_per_year: Option<f64>,
    pub cost_per_complaint: Option<f64>,
}

/// F08 opportunity cost. Also needs the monthly line revenue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpportunityParams {
    /// Fraction
    pub unmet_demand_share: Option<f64>,
    /// Fraction
    pub contribution_margin: Option<f64>,
}

/// F09 silent idleness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdlenessParams {
    pub idle_minutes_per_day: Option<f64>,
}

/// F10 line stoppages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppageParams {
    pub stoppages_per_month: Option<f64>,
    pub hours_per_stoppage: Option<f64>,
    /// Overrides the derived downtime cost when positive
    pub downtime_cost_per_hour: Option<f64>,
}

/// F11 setup / changeover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupParams {
    pub setups_per_month: Option<f64>,
    pub hours_per_setup: Option<f64>,
    /// Overrides the derived downtime cost when positive
    pub downtime_cost_per_hour: Option<f64>,
}

/// F12 risk, accidents and occupational disease.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccidentParams {
    pub leaves_per_year: Option<f64>,
    pub cost_per_leave: Option<f64>,
    pub injuries_per_year: Option<f64>,
    pub cost_per_injury: Option<f64>,
    /// Fraction
    pub lawsuit_probability: Option<f64>,
    pub lawsuit_cost: Option<f64>,
}

/// F13 forklift fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForkliftParams {
    pub fleet_size: Option<f64>,
    pub operator_cost_month: Option<f64>,
    pub equipment_cost_month: Option<f64>,
    pub energy_cost_month: Option<f64>,
    pub maintenance_cost_month: Option<f64>,
}

/// F14 supervision. Zero supervisors is a valid answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisionParams {
    pub supervisors_per_shift: Option<f64>,
    /// Falls back to the process supervisor salary
    pub supervisor_salary: Option<f64>,
}

/// F15 compliance, PPE and medical exams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceParams {
    pub ppe_cost_per_person_year: Option<f64>,
    pub exams_cost_per_person_year: Option<f64>,
}

/// F16 energy and utilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyParams {
    pub area_m2: Option<f64>,
    pub energy_cost_per_m2_year: Option<f64>,
}

/// F17 physical space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceParams {
    pub area_m2: Option<f64>,
    pub cost_per_m2_year: Option<f64>,
    /// Fraction of the area freed by automation
    pub reduction_share: Option<f64>,
}

/// F18 manual data management.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataManagementParams {
    pub people_involved: Option<f64>,
    pub hours_per_day: Option<f64>,
}

/// All formula-specific inputs, one group per formula. F01 and F06 need none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedParameters {
    pub f02: OvertimeParams,
    pub f03: LearningCurveParams,
    pub f04: TurnoverParams,
    pub f05: ScrapReworkParams,
    pub f07: QualityEscapeParams,
    pub f08: OpportunityParams,
    pub f09: IdlenessParams,
    pub f10: StoppageParams,
    pub f11: SetupParams,
    pub f12: AccidentParams,
    pub f13: ForkliftParams,
    pub f14: SupervisionParams,
    pub f15: ComplianceParams,
    pub f16: EnergyParams,
    pub f17: SpaceParams,
    pub f18: DataManagementParams,
}

impl DetailedParameters {
    /// Copy with every fraction-typed field normalized to 0..1 form.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        let norm = |v: Option<f64>| v.map(normalize_fraction);
        out.f03.supervisor_time_share = norm(self.f03.supervisor_time_share);
        out.f05.scrap_rate = norm(self.f05.scrap_rate);
        out.f05.rework_rate = norm(self.f05.rework_rate);
        out.f08.unmet_demand_share = norm(self.f08.unmet_demand_share);
        out.f08.contribution_margin = norm(self.f08.contribution_margin);
        out.f12.lawsuit_probability = norm(self.f12.lawsuit_probability);
        out.f17.reduction_share = norm(self.f17.reduction_share);
        out
    }
}
