//! Pain 3: productivity (F08..F11).

use super::bases::{MINUTES_PER_HOUR, MONTHS_PER_YEAR};

/// F08 opportunity cost of unmet demand: `revenue × unmet% × margin × 12`.
pub fn opportunity_cost(
    monthly_revenue: f64,
    unmet_demand_share: f64,
    contribution_margin: f64,
) -> f64 {
    monthly_revenue * unmet_demand_share * contribution_margin * MONTHS_PER_YEAR
}

/// F09 silent idleness: `people × (minutes / 60) × hourly × days`.
pub fn silent_idleness(
    headcount: u32,
    idle_minutes_per_day: f64,
    operator_hourly_cost: f64,
    operating_days: u32,
) -> f64 {
    f64::from(headcount)
        * (idle_minutes_per_day / MINUTES_PER_HOUR)
        * operator_hourly_cost
        * f64::from(operating_days)
}

/// F10 line stoppages: `stoppages × hours × downtime cost × 12`.
pub fn line_stoppages(
    stoppages_per_month: f64,
    hours_per_stoppage: f64,
    downtime_hourly_cost: f64,
) -> f64 {
    stoppages_per_month * hours_per_stoppage * downtime_hourly_cost * MONTHS_PER_YEAR
}

/// F11 setup / changeover: `setups × hours × downtime cost × 12`.
pub fn setup_changeover(setups_per_month: f64, hours_per_setup: f64, downtime_hourly_cost: f64) -> f64 {
    setups_per_month * hours_per_setup * downtime_hourly_cost * MONTHS_PER_YEAR
}

/// Picks the formula-specific downtime cost when it is given and positive,
/// otherwise the shared derived value.
pub fn effective_downtime_cost(override_cost: Option<f64>, derived: f64) -> f64 {
    override_cost.filter(|c| *c > 0.0).unwrap_or(derived)
}
