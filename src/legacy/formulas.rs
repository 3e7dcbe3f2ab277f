//! Legacy CO/QL/SE/PR formulas.
//!
//! Flat monthly salary over a 220 h month everywhere; no burden multiplier.

use crate::formulas::bases::{MINUTES_PER_HOUR, MONTHS_PER_YEAR};

/// Salary / hours worked per month.
pub fn hourly_cost(salary: f64, hours_per_month: f64) -> f64 {
    salary / hours_per_month
}

/// Cost of one absentee day: yearly salary spread over operating days.
pub fn absentee_day_cost(salary: f64, operating_days: u32) -> f64 {
    (salary * MONTHS_PER_YEAR) / f64::from(operating_days)
}

/// Raw material share of one unit.
pub fn material_cost(unit_cost: f64, material_fraction: f64) -> f64 {
    unit_cost * material_fraction
}

/// CO1 direct payroll: `people_per_shift × salary × shifts × 12`.
pub fn payroll(people_per_shift: u32, salary: f64, shifts_per_day: u32) -> f64 {
    f64::from(people_per_shift) * salary * f64::from(shifts_per_day) * MONTHS_PER_YEAR
}

/// CO2 outsourced production: `volume × unit cost × months`.
pub fn outsourcing(volume_per_month: f64, unit_cost: f64, months: f64) -> f64 {
    volume_per_month * unit_cost * months
}

/// CO3 material waste.
pub fn material_waste(annual_production: f64, waste_rate: f64, material_cost: f64) -> f64 {
    annual_production * waste_rate * material_cost
}

/// CO4 corrective maintenance: stopped hours per year × downtime cost.
pub fn corrective_maintenance(stoppages_per_month: f64, minutes_per_stoppage: f64, downtime_cost_per_hour: f64) -> f64 {
    (stoppages_per_month * minutes_per_stoppage / MINUTES_PER_HOUR * MONTHS_PER_YEAR) * downtime_cost_per_hour
}

/// QL1 internal rework.
pub fn rework(annual_production: f64, rework_rate: f64, unit_cost: f64, rework_factor: f64) -> f64 {
    annual_production * rework_rate * unit_cost * rework_factor
}

/// QL2 scrap.
pub fn scrap(annual_production: f64, scrap_rate: f64, unit_cost: f64) -> f64 {
    annual_production * scrap_rate * unit_cost
}

/// QL3 full manual inspection.
pub fn inspection(inspectors_per_shift: u32, salary: f64, shifts_per_day: u32) -> f64 {
    payroll(inspectors_per_shift, salary, shifts_per_day)
}

/// QL4 reverse logistics and warranty.
pub fn reverse_logistics(annual_production: f64, return_rate: f64, logistics_cost_per_unit: f64) -> f64 {
    annual_production * return_rate * logistics_cost_per_unit
}

/// QL5, PR4 and SE4 share the shape `occurrences × amount`.
pub fn occurrences(count: f64, amount_each: f64) -> f64 {
    count * amount_each
}

/// SE1 absenteeism.
pub fn absenteeism(days_lost_per_year: f64, day_cost: f64) -> f64 {
    days_lost_per_year * day_cost
}

/// SE2 turnover: departures × termination cost.
pub fn turnover(departures_per_year: f64, termination_cost: f64) -> f64 {
    departures_per_year * termination_cost
}

/// SE3 recurring training of replacements.
pub fn recurring_training(departures_per_year: f64, training_cost: f64) -> f64 {
    departures_per_year * training_cost
}

/// PR1 recurring overtime: `total OT hours/month × 12 × hourly × factor`.
pub fn overtime(total_hours_per_month: f64, hourly_cost: f64, overtime_factor: f64) -> f64 {
    total_hours_per_month * MONTHS_PER_YEAR * hourly_cost * overtime_factor
}

/// PR2 extra headcount hired to keep up.
pub fn extra_headcount(people: f64, monthly_cost: f64) -> f64 {
    people * monthly_cost * MONTHS_PER_YEAR
}

/// PR3 lost sales.
pub fn lost_sales(unmet_demand_per_month: f64, margin_per_unit: f64) -> f64 {
    unmet_demand_per_month * MONTHS_PER_YEAR * margin_per_unit
}
