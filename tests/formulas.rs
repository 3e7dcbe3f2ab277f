use automation_roi::formulas::{
    self, hidden, indicators, labor, productivity, quality, safety,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn production_bases() {
    assert_close("annual", formulas::annual_production(10.0, 8.0, 2, 250), 2_400_000.0, 1e-12);
    assert_close("monthly", formulas::monthly_production_from_rate(10.0, 8.0, 2), 201_600.0, 1e-12);
    assert_close("hours", formulas::annual_operating_hours(8.0, 2, 250), 4_000.0, 1e-12);
    assert_eq!(formulas::exposed_people(5, 2), 10);
    assert_eq!(formulas::exposed_people(2_000_000_000, 3), u32::MAX);
}

#[test]
fn hourly_costs_use_the_production_month() {
    // 2500 × 1.7 / 176
    assert_close("operator", formulas::operator_hourly_cost(2500.0, 1.7), 24.147_727, 1e-6);
    assert_close("downtime", formulas::downtime_hourly_cost(Some(1_760_000.0)), 10_000.0, 1e-12);
    assert_eq!(formulas::downtime_hourly_cost(None), 0.0);
    assert_eq!(formulas::downtime_hourly_cost(Some(0.0)), 0.0);
}

#[test]
fn f01_direct_labor() {
    assert_close("f01", labor::direct_labor(10, 2500.0, 1.7), 510_000.0, 1e-12);
}

#[test]
fn f02_overtime_uses_clt_divisor() {
    // hourly = 2200 × 2.0 / 220 = 20; 10 × 10 × 20 × 1.5 × 12
    assert_close("f02", labor::overtime(10, 10.0, 2200.0, 2.0), 360_000.0, 1e-12);
    let with_176 = 10.0 * 10.0 * (2200.0 * 2.0 / 176.0) * 1.5 * 12.0;
    assert!((labor::overtime(10, 10.0, 2200.0, 2.0) - with_176).abs() > 1.0);
}

#[test]
fn f03_learning_curve() {
    let cost = labor::learning_curve(labor::LearningCurveInput {
        hires_per_year: 4.0,
        rookie_salary: 2000.0,
        burden_multiplier: 1.7,
        ramp_months: 3.0,
        supervisor_salary: 5000.0,
        supervisor_time_share: 0.2,
    });
    // 4 × (2000×1.7×3 + 5000×1.7×0.2×3) = 4 × (10200 + 5100)
    assert_close("f03", cost, 61_200.0, 1e-12);
}

#[test]
fn f04_turnover() {
    assert_close("f04", labor::turnover(6.0, 2500.0, 1.5), 22_500.0, 1e-12);
}

#[test]
fn f05_splits_scrap_and_rework() {
    let r = quality::scrap_and_rework(quality::ScrapReworkInput {
        monthly_production: 201_600.0,
        scrap_rate: 0.02,
        raw_material_cost_per_unit: 15.0,
        rework_rate: 0.01,
        rework_hours_per_unit: 0.1,
        operator_hourly_cost: 20.0,
    });
    assert_close("scrap", r.scrap, 201_600.0 * 0.02 * 15.0 * 12.0, 1e-12);
    assert_close("rework", r.rework, 201_600.0 * 0.01 * 0.1 * 20.0 * 12.0, 1e-12);
    assert_eq!(r.total, r.scrap + r.rework);
}

#[test]
fn f06_f07_quality() {
    assert_close("f06", quality::manual_inspection(2, 3000.0, 1.7), 122_400.0, 1e-12);
    assert_eq!(quality::quality_escapes(12.0, 2000.0), 24_000.0);
}

#[test]
fn productivity_formulas() {
    assert_close(
        "f08",
        productivity::opportunity_cost(1_760_000.0, 0.05, 0.3),
        316_800.0,
        1e-12,
    );
    // 10 × (30/60) × 20 × 250
    assert_close("f09", productivity::silent_idleness(10, 30.0, 20.0, 250), 25_000.0, 1e-12);
    assert_close("f10", productivity::line_stoppages(4.0, 2.0, 10_000.0), 960_000.0, 1e-12);
    assert_close("f11", productivity::setup_changeover(8.0, 0.5, 10_000.0), 480_000.0, 1e-12);
}

#[test]
fn downtime_override_only_when_positive() {
    assert_eq!(productivity::effective_downtime_cost(Some(5000.0), 10_000.0), 5000.0);
    assert_eq!(productivity::effective_downtime_cost(Some(0.0), 10_000.0), 10_000.0);
    assert_eq!(productivity::effective_downtime_cost(None, 10_000.0), 10_000.0);
}

#[test]
fn safety_formulas() {
    let r = safety::accident_risk(safety::AccidentRiskInput {
        leaves_per_year: 3.0,
        cost_per_leave: 8000.0,
        injuries_per_year: 2.0,
        cost_per_injury: 15_000.0,
        lawsuit_probability: 0.1,
        lawsuit_cost: 200_000.0,
    });
    assert_eq!(r.leave, 24_000.0);
    assert_eq!(r.injury, 30_000.0);
    assert_close("legal", r.legal, 20_000.0, 1e-12);
    assert_close("total", r.total, 74_000.0, 1e-12);

    let fleet = safety::forklift_fleet(safety::ForkliftFleetInput {
        fleet_size: 3.0,
        operator_cost_month: 4000.0,
        equipment_cost_month: 3000.0,
        energy_cost_month: 500.0,
        maintenance_cost_month: 800.0,
    });
    assert_close("f13", fleet, 298_800.0, 1e-12);
}

#[test]
fn hidden_cost_formulas() {
    assert_close("f14", hidden::supervision(2.0, 5000.0, 1.7), 204_000.0, 1e-12);
    assert_eq!(hidden::compliance_ppe(10, 600.0, 400.0), 10_000.0);
    assert_eq!(hidden::energy_utilities(500.0, 40.0), 20_000.0);
    assert_close("f17", hidden::physical_space(500.0, 300.0, 0.4), 60_000.0, 1e-12);
    assert_close("f18", hidden::data_management(2.0, 1.5, 20.0, 250), 15_000.0, 1e-12);
}

#[test]
fn payback_and_roi() {
    assert_eq!(indicators::payback_years(500_000.0, 250_000.0), 2.0);
    assert!(indicators::payback_years(500_000.0, 0.0).is_infinite());
    assert_eq!(indicators::roi_percent(500_000.0, 250_000.0, 1), -50.0);
    assert_eq!(indicators::roi_percent(500_000.0, 250_000.0, 3), 50.0);
    assert_eq!(indicators::roi_percent(500_000.0, 250_000.0, 5), 150.0);
    assert_eq!(indicators::roi_percent(0.0, 250_000.0, 3), 0.0);
    assert_eq!(indicators::roi_percent(500_000.0, 0.0, 4), -100.0);
    assert_close("gain", indicators::annual_gain(1_000_000.0, 0.3), 300_000.0, 1e-12);
}
