//! Base quantities reused by several formulas.

/// Production hours per month used to allocate labor and downtime cost (44 h/week × 4).
pub const PRODUCTION_HOURS_PER_MONTH: f64 = 176.0;
/// Legal monthly hours (CLT) used only to price overtime.
pub const CLT_HOURS_PER_MONTH: f64 = 220.0;
/// Operating days per month used when monthly volume is estimated from a rate.
pub const OPERATING_DAYS_PER_MONTH: f64 = 21.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Overtime premium over the regular hourly cost.
pub const OVERTIME_PREMIUM: f64 = 1.5;
/// Turnover cost as a multiple of salary when none is given (benchmark 1.5 to 3.0).
pub const DEFAULT_TURNOVER_COST_FACTOR: f64 = 1.5;

/// Annual production [units] from a rate in units/minute.
pub fn annual_production(
    rate_per_min: f64,
    shift_hours: f64,
    shifts_per_day: u32,
    operating_days: u32,
) -> f64 {
    rate_per_min * MINUTES_PER_HOUR * shift_hours * f64::from(shifts_per_day) * f64::from(operating_days)
}

/// Monthly production [units] from a rate, on the fixed 21-day month.
pub fn monthly_production_from_rate(rate_per_min: f64, shift_hours: f64, shifts_per_day: u32) -> f64 {
    rate_per_min * MINUTES_PER_HOUR * shift_hours * f64::from(shifts_per_day) * OPERATING_DAYS_PER_MONTH
}

pub fn annual_operating_hours(shift_hours: f64, shifts_per_day: u32, operating_days: u32) -> f64 {
    shift_hours * f64::from(shifts_per_day) * f64::from(operating_days)
}

/// People exposed to the process over a whole day. Saturates at `u32::MAX`.
pub fn exposed_people(people_per_shift: u32, shifts_per_day: u32) -> u32 {
    people_per_shift.saturating_mul(shifts_per_day)
}

/// Fully-loaded hourly operator cost on the 176 h production month.
pub fn operator_hourly_cost(salary: f64, burden_multiplier: f64) -> f64 {
    (salary * burden_multiplier) / PRODUCTION_HOURS_PER_MONTH
}

/// Hourly opportunity cost of a stopped line, proxied by monthly line revenue.
/// Zero when revenue is unknown.
pub fn downtime_hourly_cost(monthly_line_revenue: Option<f64>) -> f64 {
    match monthly_line_revenue {
        Some(revenue) if revenue > 0.0 => revenue / PRODUCTION_HOURS_PER_MONTH,
        _ => 0.0,
    }
}
