use serde::{Serialize, Serializer};

use crate::formula::{FormulaId, PainCategory};

/// Years covered by the ROI table.
pub const ROI_YEARS: [u32; 5] = [1, 2, 3, 4, 5];

/// One named line of a category breakdown, e.g. `F05 - Refugo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub formula: FormulaId,
    pub label: String,
    pub value: f64,
    /// False when the formula was not selected or lacked parameters
    pub evaluated: bool,
}

/// Subtotal and ordered breakdown of one pain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: PainCategory,
    pub subtotal: f64,
    pub lines: Vec<BreakdownLine>,
}

impl CategoryResult {
    /// Breakdown as `(label, value)` pairs in display order.
    pub fn as_pairs(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.lines.iter().map(|l| (l.label.as_str(), l.value))
    }

    pub fn line(&self, label: &str) -> Option<&BreakdownLine> {
        self.lines.iter().find(|l| l.label == label)
    }
}

/// Cost and gain of one formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaOutcome {
    pub formula: FormulaId,
    pub evaluated: bool,
    pub annual_cost: f64,
    pub target: f64,
    pub annual_gain: f64,
}

/// Output of one calculation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedResult {
    /// Always five entries, in [`PainCategory::ALL`] order
    pub categories: Vec<CategoryResult>,
    /// Always eighteen entries, in [`FormulaId::ALL`] order
    pub formulas: Vec<FormulaOutcome>,
    pub total_annual_cost: f64,
    pub total_annual_gain: f64,
    pub average_investment: f64,
    /// `f64::INFINITY` when there is no gain; `null` in JSON
    #[serde(serialize_with = "finite_or_null")]
    pub payback_years: f64,
    /// ROI in percent for years 1..=5
    pub roi_percent: [f64; 5],
    pub sector: String,
    pub company_size: String,
    pub burden_multiplier: f64,
    pub downtime_hourly_cost: f64,
    pub monthly_line_revenue: f64,
}

pub(crate) fn finite_or_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

impl ConsolidatedResult {
    pub fn category(&self, category: PainCategory) -> &CategoryResult {
        &self.categories[category.index()]
    }

    pub fn subtotal(&self, category: PainCategory) -> f64 {
        self.category(category).subtotal
    }

    pub fn formula(&self, id: FormulaId) -> &FormulaOutcome {
        &self.formulas[id as usize]
    }

    /// ROI for a year in 1..=5.
    pub fn roi(&self, years: u32) -> Option<f64> {
        let idx = usize::try_from(years).ok()?.checked_sub(1)?;
        self.roi_percent.get(idx).copied()
    }

    /// Payback in years, `None` when the investment never pays back.
    pub fn payback(&self) -> Option<f64> {
        self.payback_years.is_finite().then_some(self.payback_years)
    }

    pub fn evaluated_formulas(&self) -> impl Iterator<Item = &FormulaOutcome> + '_ {
        self.formulas.iter().filter(|f| f.evaluated)
    }
}
