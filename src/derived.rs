//! Derived-base calculator: intermediate quantities computed once per scenario.

use serde::Serialize;

use crate::formulas::bases;
use crate::scenario::CurrentProcess;

/// Reusable quantities derived from the raw process description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedBases {
    /// Units per year
    pub annual_production: f64,
    /// Units per month
    pub monthly_production: f64,
    pub annual_operating_hours: f64,
    pub exposed_process_people: u32,
    pub exposed_inspection_people: u32,
    /// Fully-loaded operator cost per hour (176 h month)
    pub operator_hourly_cost: f64,
    /// Opportunity cost of one hour of stopped line
    pub downtime_hourly_cost: f64,
    pub burden_multiplier: f64,
}

/// Computes [`DerivedBases`] for a process and burden multiplier.
///
/// Missing production (no positive rate or volume) yields zero production,
/// not an error.
pub fn derive_bases(process: &CurrentProcess, burden_multiplier: f64) -> DerivedBases {
    let (monthly_production, annual_production) = match (
        process.monthly_volume.filter(|v| *v > 0.0),
        process.production_rate_per_min.filter(|r| *r > 0.0),
    ) {
        (Some(volume), _) => (volume, volume * bases::MONTHS_PER_YEAR),
        (None, Some(rate)) => (
            bases::monthly_production_from_rate(rate, process.shift_hours, process.shifts_per_day),
            bases::annual_production(
                rate,
                process.shift_hours,
                process.shifts_per_day,
                process.operating_days_per_year,
            ),
        ),
        (None, None) => (0.0, 0.0),
    };

    DerivedBases {
        annual_production,
        monthly_production,
        annual_operating_hours: bases::annual_operating_hours(
            process.shift_hours,
            process.shifts_per_day,
            process.operating_days_per_year,
        ),
        exposed_process_people: bases::exposed_people(
            process.process_people_per_shift,
            process.shifts_per_day,
        ),
        exposed_inspection_people: bases::exposed_people(
            process.inspection_people_per_shift,
            process.shifts_per_day,
        ),
        operator_hourly_cost: bases::operator_hourly_cost(process.operator_salary, burden_multiplier),
        downtime_hourly_cost: bases::downtime_hourly_cost(process.monthly_line_revenue),
        burden_multiplier,
    }
}
