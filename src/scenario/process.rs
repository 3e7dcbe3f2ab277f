use serde::{Deserialize, Serialize};

/// As-is description of the manual process.
///
/// Production is given either as a rate (`production_rate_per_min`) or as a
/// monthly volume; when both are positive the monthly volume wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentProcess {
    /// Units per minute
    #[serde(default)]
    pub production_rate_per_min: Option<f64>,
    /// Units per month
    #[serde(default)]
    pub monthly_volume: Option<f64>,
    /// Shift length [h], 1..24
    pub shift_hours: f64,
    /// 1..3
    pub shifts_per_day: u32,
    /// 1..365
    pub operating_days_per_year: u32,
    pub process_people_per_shift: u32,
    pub inspection_people_per_shift: u32,
    /// Gross monthly salaries
    pub operator_salary: f64,
    pub inspector_salary: f64,
    pub supervisor_salary: f64,
    pub raw_material_cost_per_unit: f64,
    pub unit_cost: f64,
    /// Monthly revenue of the line, proxy for the cost of downtime
    #[serde(default)]
    pub monthly_line_revenue: Option<f64>,
}

impl CurrentProcess {
    pub fn has_production_signal(&self) -> bool {
        self.production_rate_per_min.is_some_and(|r| r > 0.0)
            || self.monthly_volume.is_some_and(|v| v > 0.0)
    }

    pub fn has_revenue(&self) -> bool {
        self.monthly_line_revenue.is_some_and(|r| r > 0.0)
    }
}
