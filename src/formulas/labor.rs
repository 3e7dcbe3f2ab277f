//! Pain 1: labor (F01..F04).

use super::bases::{CLT_HOURS_PER_MONTH, MONTHS_PER_YEAR, OVERTIME_PREMIUM};

/// F01 direct labor: `headcount × salary × burden × 12`.
pub fn direct_labor(headcount: u32, salary: f64, burden_multiplier: f64) -> f64 {
    f64::from(headcount) * salary * burden_multiplier * MONTHS_PER_YEAR
}

/// F02 recurring overtime.
///
/// The hourly base uses the 220 h CLT month, not the 176 h production month.
pub fn overtime(
    headcount: u32,
    hours_per_person_month: f64,
    salary: f64,
    burden_multiplier: f64,
) -> f64 {
    let hourly = (salary * burden_multiplier) / CLT_HOURS_PER_MONTH;
    f64::from(headcount) * hours_per_person_month * hourly * OVERTIME_PREMIUM * MONTHS_PER_YEAR
}

/// F03 learning curve input.
#[derive(Debug, Clone)]
pub struct LearningCurveInput {
    pub hires_per_year: f64,
    pub rookie_salary: f64,
    pub burden_multiplier: f64,
    /// Months until a new hire reaches full productivity
    pub ramp_months: f64,
    pub supervisor_salary: f64,
    /// Share of supervisor time spent on the new hire (0..1)
    pub supervisor_time_share: f64,
}

/// F03 learning curve:
/// `hires × [(rookie × burden × months) + (supervisor × burden × share × months)]`.
pub fn learning_curve(input: LearningCurveInput) -> f64 {
    let rookie = input.rookie_salary * input.burden_multiplier * input.ramp_months;
    let supervision = input.supervisor_salary
        * input.burden_multiplier
        * input.supervisor_time_share
        * input.ramp_months;
    input.hires_per_year * (rookie + supervision)
}

/// F04 turnover: `departures × salary × factor`.
pub fn turnover(departures_per_year: f64, salary: f64, cost_factor: f64) -> f64 {
    departures_per_year * salary * cost_factor
}
