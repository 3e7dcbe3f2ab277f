//! Pain 2: quality (F05..F07).

use super::bases::MONTHS_PER_YEAR;

/// F05 scrap and rework input.
#[derive(Debug, Clone)]
pub struct ScrapReworkInput {
    pub monthly_production: f64,
    /// Scrapped share of production (0..1)
    pub scrap_rate: f64,
    pub raw_material_cost_per_unit: f64,
    /// Reworked share of production (0..1)
    pub rework_rate: f64,
    pub rework_hours_per_unit: f64,
    pub operator_hourly_cost: f64,
}

/// F05 result, annual values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrapReworkResult {
    pub scrap: f64,
    pub rework: f64,
    pub total: f64,
}

/// F05 scrap and rework.
///
/// - scrap = production × scrap% × material × 12
/// - rework = production × rework% × hours × hourly × 12
pub fn scrap_and_rework(input: ScrapReworkInput) -> ScrapReworkResult {
    let scrap = input.monthly_production
        * input.scrap_rate
        * input.raw_material_cost_per_unit
        * MONTHS_PER_YEAR;
    let rework = input.monthly_production
        * input.rework_rate
        * input.rework_hours_per_unit
        * input.operator_hourly_cost
        * MONTHS_PER_YEAR;
    ScrapReworkResult {
        scrap,
        rework,
        total: scrap + rework,
    }
}

/// F06 manual inspection: `inspectors × salary × burden × 12`.
pub fn manual_inspection(inspectors: u32, inspector_salary: f64, burden_multiplier: f64) -> f64 {
    f64::from(inspectors) * inspector_salary * burden_multiplier * MONTHS_PER_YEAR
}

/// F07 quality escapes: `complaints × cost per complaint`.
pub fn quality_escapes(complaints_per_year: f64, cost_per_complaint: f64) -> f64 {
    complaints_per_year * cost_per_complaint
}
