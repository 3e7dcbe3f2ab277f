use crate::derived::derive_bases;
use crate::formula::{FormulaId, PainCategory};
use crate::formulas::indicators;
use crate::scenario::{
    ClientProfile, CurrentProcess, DetailedParameters, InvestmentRange, ReductionTargets,
    SelectedPains,
};

use super::registry::{self, EvalContext};
use super::result::{BreakdownLine, CategoryResult, ConsolidatedResult, FormulaOutcome, ROI_YEARS};

/// Runs the revised-model calculation on already validated inputs.
///
/// Unselected or parameter-incomplete formulas contribute exactly zero.
/// Validation is the caller's job; see [`crate::scenario::Scenario::evaluate`].
pub fn calculate(
    client: &ClientProfile,
    process: &CurrentProcess,
    pains: &SelectedPains,
    params: &DetailedParameters,
    investment: &InvestmentRange,
    targets: &ReductionTargets,
) -> ConsolidatedResult {
    let bases = derive_bases(process, client.burden_multiplier);
    let ctx = EvalContext {
        process,
        params,
        bases: &bases,
    };

    let mut categories: Vec<CategoryResult> = PainCategory::ALL
        .into_iter()
        .map(|category| CategoryResult {
            category,
            subtotal: 0.0,
            lines: Vec::new(),
        })
        .collect();
    let mut formulas = Vec::with_capacity(FormulaId::ALL.len());

    for id in FormulaId::ALL {
        let labels = registry::line_labels(id);
        let value = if pains.is_selected(id) {
            let value = registry::evaluate(id, &ctx);
            match &value {
                Some(v) => tracing::debug!(formula = %id, annual_cost = v.total, "formula evaluated"),
                None => tracing::debug!(formula = %id, "selected formula skipped: missing parameters"),
            }
            value
        } else {
            None
        };

        let evaluated = value.is_some();
        let (parts, total) = match value {
            Some(v) => (v.parts, v.total),
            None => (vec![0.0; labels.len()], 0.0),
        };

        let lines = &mut categories[id.category().index()].lines;
        for (label, part) in labels.iter().zip(parts) {
            lines.push(BreakdownLine {
                formula: id,
                label: format!("{} - {}", id.code(), label),
                value: part,
                evaluated,
            });
        }

        let target = targets.get(id);
        formulas.push(FormulaOutcome {
            formula: id,
            evaluated,
            annual_cost: total,
            target,
            annual_gain: indicators::annual_gain(total, target),
        });
    }

    for category in &mut categories {
        category.subtotal = category.lines.iter().map(|l| l.value).sum();
    }
    let total_annual_cost: f64 = categories.iter().map(|c| c.subtotal).sum();
    let total_annual_gain: f64 = formulas.iter().map(|f| f.annual_gain).sum();
    let average_investment = investment.average();
    let payback_years = indicators::payback_years(average_investment, total_annual_gain);
    let roi_percent =
        ROI_YEARS.map(|years| indicators::roi_percent(average_investment, total_annual_gain, years));

    tracing::info!(
        evaluated = formulas.iter().filter(|f| f.evaluated).count(),
        total_annual_cost,
        total_annual_gain,
        payback_years,
        "calculation finished"
    );

    ConsolidatedResult {
        categories,
        formulas,
        total_annual_cost,
        total_annual_gain,
        average_investment,
        payback_years,
        roi_percent,
        sector: client.sector.clone(),
        company_size: client.company_size.clone(),
        burden_multiplier: client.burden_multiplier,
        downtime_hourly_cost: bases.downtime_hourly_cost,
        monthly_line_revenue: process.monthly_line_revenue.unwrap_or(0.0),
    }
}
