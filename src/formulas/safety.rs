//! Pain 4: safety (F12, F13).

use super::bases::MONTHS_PER_YEAR;

/// F12 risk and accidents input, annual figures.
#[derive(Debug, Clone)]
pub struct AccidentRiskInput {
    pub leaves_per_year: f64,
    pub cost_per_leave: f64,
    pub injuries_per_year: f64,
    pub cost_per_injury: f64,
    /// Probability of a labor lawsuit within the year (0..1)
    pub lawsuit_probability: f64,
    pub lawsuit_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentRiskResult {
    pub leave: f64,
    pub injury: f64,
    pub legal: f64,
    pub total: f64,
}

/// F12: sum of three independent products (leaves, injuries, expected legal cost).
pub fn accident_risk(input: AccidentRiskInput) -> AccidentRiskResult {
    let leave = input.leaves_per_year * input.cost_per_leave;
    let injury = input.injuries_per_year * input.cost_per_injury;
    let legal = input.lawsuit_probability * input.lawsuit_cost;
    AccidentRiskResult {
        leave,
        injury,
        legal,
        total: leave + injury + legal,
    }
}

/// F13 forklift fleet monthly costs, per vehicle.
#[derive(Debug, Clone)]
pub struct ForkliftFleetInput {
    pub fleet_size: f64,
    pub operator_cost_month: f64,
    pub equipment_cost_month: f64,
    pub energy_cost_month: f64,
    pub maintenance_cost_month: f64,
}

/// F13 forklift fleet TCO: `fleet × (operator + equipment + energy + maintenance) × 12`.
pub fn forklift_fleet(input: ForkliftFleetInput) -> f64 {
    let monthly = input.operator_cost_month
        + input.equipment_cost_month
        + input.energy_cost_month
        + input.maintenance_cost_month;
    input.fleet_size * monthly * MONTHS_PER_YEAR
}
