//! Pain 5: hidden costs (F14..F18).

use super::bases::MONTHS_PER_YEAR;

/// F14 supervision. `supervisors` is already multiplied by shifts per day.
pub fn supervision(supervisors: f64, supervisor_salary: f64, burden_multiplier: f64) -> f64 {
    supervisors * supervisor_salary * burden_multiplier * MONTHS_PER_YEAR
}

/// F15 compliance: `people × (PPE + medical exams)` per year.
pub fn compliance_ppe(headcount: u32, ppe_cost_per_year: f64, exams_cost_per_year: f64) -> f64 {
    f64::from(headcount) * (ppe_cost_per_year + exams_cost_per_year)
}

/// F16 energy and utilities: `area × cost per m² per year`.
pub fn energy_utilities(area_m2: f64, energy_cost_per_m2_year: f64) -> f64 {
    area_m2 * energy_cost_per_m2_year
}

/// F17 physical space freed by automation: `area × cost per m² × reduction`.
pub fn physical_space(area_m2: f64, cost_per_m2_year: f64, reduction_share: f64) -> f64 {
    area_m2 * cost_per_m2_year * reduction_share
}

/// F18 manual data management: `people × hours/day × hourly × days`.
pub fn data_management(
    people: f64,
    hours_per_day: f64,
    operator_hourly_cost: f64,
    operating_days: u32,
) -> f64 {
    people * hours_per_day * operator_hourly_cost * f64::from(operating_days)
}
