use tabled::builder::Builder;
use tabled::settings::Style;

use crate::areas::AREAS;
use crate::engine::{ConsolidatedResult, ROI_YEARS};
use crate::i18n::{keys, Translator};
use crate::legacy::{LegacyClient, LegacyResult};
use crate::money::{format_currency, format_decimal, format_payback, format_percent};
use crate::scenario::{BurdenMultiplier, ClientProfile};
use crate::validation::ValidationErrors;

fn table(rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::markdown()).to_string()
}

fn header(tr: &Translator, cols: &[&str]) -> Vec<String> {
    cols.iter().map(|k| tr.t(k).to_string()).collect()
}

fn burden_label(multiplier: f64) -> String {
    BurdenMultiplier::from_value(multiplier)
        .map_or_else(|| format!("{}x", format_decimal(multiplier, 2)), |b| b.label().to_string())
}

/// Console report of a revised-model result.
pub fn render_result(result: &ConsolidatedResult, client: &ClientProfile, tr: &Translator, symbol: &str) -> String {
    let money = |v: f64| format_currency(v, symbol);
    let mut out = String::new();

    out.push_str(tr.t(keys::REPORT_TITLE));
    out.push('\n');
    out.push_str(&format!(
        "{}: {} | {}: {} | {}: {} | {}: {} | {}: {}\n",
        tr.t(keys::REPORT_CLIENT),
        client.client_name,
        tr.t(keys::REPORT_PROJECT),
        client.project_name,
        tr.t(keys::REPORT_SECTOR),
        result.sector,
        tr.t(keys::REPORT_SIZE),
        result.company_size,
        tr.t(keys::REPORT_BURDEN),
        burden_label(result.burden_multiplier),
    ));
    if result.downtime_hourly_cost > 0.0 {
        out.push_str(&format!(
            "{}: {}\n",
            tr.t(keys::REPORT_DOWNTIME),
            money(result.downtime_hourly_cost)
        ));
    }
    out.push('\n');

    let mut rows = vec![header(tr, &[keys::COL_CATEGORY, keys::COL_SUBTOTAL])];
    rows.extend(
        result
            .categories
            .iter()
            .map(|c| vec![c.category.label().to_string(), money(c.subtotal)]),
    );
    out.push_str(&table(rows));
    out.push_str("\n\n");

    let evaluated: Vec<_> = result
        .categories
        .iter()
        .flat_map(|c| c.lines.iter())
        .filter(|l| l.evaluated)
        .collect();
    if evaluated.is_empty() {
        out.push_str(tr.t(keys::REPORT_NOTHING_SELECTED));
        out.push_str("\n\n");
    } else {
        let mut rows = vec![header(tr, &[keys::COL_LINE, keys::COL_ANNUAL_COST])];
        rows.extend(evaluated.iter().map(|l| vec![l.label.clone(), money(l.value)]));
        out.push_str(&table(rows));
        out.push_str("\n\n");

        let mut rows = vec![header(tr, &[keys::COL_LINE, keys::COL_TARGET, keys::COL_GAIN])];
        rows.extend(result.evaluated_formulas().map(|f| {
            vec![
                format!("{} - {}", f.formula.code(), f.formula.label()),
                format_percent(f.target * 100.0),
                money(f.annual_gain),
            ]
        }));
        out.push_str(&table(rows));
        out.push_str("\n\n");
    }

    let rows = vec![
        header(tr, &[keys::COL_INDICATOR, keys::COL_VALUE]),
        vec![tr.t(keys::SUMMARY_TOTAL_COST).to_string(), money(result.total_annual_cost)],
        vec![tr.t(keys::SUMMARY_TOTAL_GAIN).to_string(), money(result.total_annual_gain)],
        vec![tr.t(keys::SUMMARY_AVG_INVESTMENT).to_string(), money(result.average_investment)],
        vec![tr.t(keys::SUMMARY_PAYBACK).to_string(), format_payback(result.payback_years)],
    ];
    out.push_str(&table(rows));
    out.push_str("\n\n");

    let mut rows = vec![header(tr, &[keys::COL_YEAR, keys::COL_ROI])];
    rows.extend(
        ROI_YEARS
            .iter()
            .zip(result.roi_percent)
            .map(|(year, roi)| vec![year.to_string(), format_percent(roi)]),
    );
    out.push_str(&table(rows));
    out.push('\n');
    out
}

/// Console report of a legacy-model result.
pub fn render_legacy_result(result: &LegacyResult, client: &LegacyClient, tr: &Translator, symbol: &str) -> String {
    let money = |v: f64| format_currency(v, symbol);
    let mut out = String::new();

    out.push_str(tr.t(keys::REPORT_LEGACY_TITLE));
    out.push('\n');
    out.push_str(&format!(
        "{}: {} | {}: {} | {}: {}\n\n",
        tr.t(keys::REPORT_CLIENT),
        client.client_name,
        tr.t(keys::REPORT_PROJECT),
        client.project_name,
        tr.t(keys::REPORT_SECTOR),
        client.sector,
    ));

    let mut rows = vec![header(tr, &[keys::COL_CATEGORY, keys::COL_LINE, keys::COL_ANNUAL_COST])];
    for category in &result.categories {
        for line in category.lines.iter().filter(|l| l.value != 0.0) {
            rows.push(vec![
                category.category.label().to_string(),
                line.label.clone(),
                money(line.value),
            ]);
        }
        rows.push(vec![
            category.category.label().to_string(),
            tr.t(keys::COL_SUBTOTAL).to_string(),
            money(category.subtotal),
        ]);
    }
    out.push_str(&table(rows));
    out.push_str("\n\n");

    let rows = vec![
        header(tr, &[keys::COL_INDICATOR, keys::COL_VALUE]),
        vec![tr.t(keys::SUMMARY_TOTAL_COST).to_string(), money(result.total_annual_cost)],
        vec![tr.t(keys::SUMMARY_TOTAL_GAIN).to_string(), money(result.total_annual_gain)],
        vec![tr.t(keys::SUMMARY_AVG_INVESTMENT).to_string(), money(result.average_investment)],
        vec![tr.t(keys::SUMMARY_PAYBACK).to_string(), format_payback(result.payback_years)],
        vec![format!("{} 1", tr.t(keys::COL_ROI)), format_percent(result.roi_1_year)],
        vec![format!("{} 3", tr.t(keys::COL_ROI)), format_percent(result.roi_3_years)],
        vec![format!("{} 5", tr.t(keys::COL_ROI)), format_percent(result.roi_5_years)],
    ];
    out.push_str(&table(rows));
    out.push('\n');
    out
}

pub fn render_validation_errors(errors: &ValidationErrors, tr: &Translator) -> String {
    let mut out = format!("{}\n", tr.t(keys::VALIDATION_HEADING));
    for message in errors.messages() {
        out.push_str(&format!("  - {message}\n"));
    }
    out
}

/// Sector presets with their formula codes.
pub fn render_areas(tr: &Translator) -> String {
    let mut rows = vec![header(tr, &[keys::COL_KEY, keys::COL_NAME, keys::COL_FORMULAS])];
    rows.extend(AREAS.iter().map(|area| {
        vec![
            area.key.to_string(),
            area.name.to_string(),
            area.formulas
                .iter()
                .map(|f| f.code())
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }));
    format!("{}\n{}\n", tr.t(keys::AREAS_HEADING), table(rows))
}
