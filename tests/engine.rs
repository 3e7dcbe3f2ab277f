use automation_roi::derived::derive_bases;
use automation_roi::engine::{self, ConsolidatedResult};
use automation_roi::formula::{FormulaId, PainCategory};
use automation_roi::scenario::{
    ClientProfile, CurrentProcess, DetailedParameters, InvestmentRange, ReductionTargets, Scenario,
    SelectedPains,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn client() -> ClientProfile {
    ClientProfile {
        client_name: "Cliente X".into(),
        project_name: "Projeto Y".into(),
        sector: "area_1_linhas_montagem".into(),
        company_size: "media".into(),
        burden_multiplier: 1.7,
    }
}

fn process() -> CurrentProcess {
    CurrentProcess {
        production_rate_per_min: Some(10.0),
        monthly_volume: None,
        shift_hours: 8.0,
        shifts_per_day: 2,
        operating_days_per_year: 250,
        process_people_per_shift: 5,
        inspection_people_per_shift: 1,
        operator_salary: 2500.0,
        inspector_salary: 3000.0,
        supervisor_salary: 5000.0,
        raw_material_cost_per_unit: 15.0,
        unit_cost: 100.0,
        // 10 000 per stopped hour
        monthly_line_revenue: Some(1_760_000.0),
    }
}

fn scenario(pains: &[FormulaId]) -> Scenario {
    Scenario {
        pains: pains.iter().copied().collect(),
        client: client(),
        process: process(),
        investment: InvestmentRange::new(400_000.0, 600_000.0),
        targets: ReductionTargets::new(),
        parameters: DetailedParameters::default(),
    }
}

fn full_parameters() -> DetailedParameters {
    let mut p = DetailedParameters::default();
    p.f02.hours_per_person_month = Some(10.0);
    p.f03.hires_per_year = Some(4.0);
    p.f03.rookie_salary = Some(2000.0);
    p.f03.ramp_months = Some(3.0);
    p.f03.supervisor_time_share = Some(0.2);
    p.f04.departures_per_year = Some(6.0);
    p.f05.scrap_rate = Some(0.02);
    p.f05.rework_rate = Some(0.01);
    p.f05.rework_hours_per_unit = Some(0.1);
    p.f07.complaints_per_year = Some(12.0);
    p.f07.cost_per_complaint = Some(2000.0);
    p.f08.unmet_demand_share = Some(0.05);
    p.f08.contribution_margin = Some(0.3);
    p.f09.idle_minutes_per_day = Some(30.0);
    p.f10.stoppages_per_month = Some(4.0);
    p.f10.hours_per_stoppage = Some(2.0);
    p.f11.setups_per_month = Some(8.0);
    p.f11.hours_per_setup = Some(0.5);
    p.f12.leaves_per_year = Some(3.0);
    p.f12.cost_per_leave = Some(8000.0);
    p.f12.injuries_per_year = Some(2.0);
    p.f12.cost_per_injury = Some(15_000.0);
    p.f12.lawsuit_probability = Some(0.1);
    p.f12.lawsuit_cost = Some(200_000.0);
    p.f13.fleet_size = Some(3.0);
    p.f13.operator_cost_month = Some(4000.0);
    p.f13.equipment_cost_month = Some(3000.0);
    p.f13.energy_cost_month = Some(500.0);
    p.f13.maintenance_cost_month = Some(800.0);
    p.f14.supervisors_per_shift = Some(1.0);
    p.f15.ppe_cost_per_person_year = Some(600.0);
    p.f15.exams_cost_per_person_year = Some(400.0);
    p.f16.area_m2 = Some(500.0);
    p.f16.energy_cost_per_m2_year = Some(40.0);
    p.f17.area_m2 = Some(500.0);
    p.f17.cost_per_m2_year = Some(300.0);
    p.f17.reduction_share = Some(0.4);
    p.f18.people_involved = Some(2.0);
    p.f18.hours_per_day = Some(1.5);
    p
}

fn everything() -> Scenario {
    let mut s = scenario(&FormulaId::ALL);
    s.parameters = full_parameters();
    s.targets = FormulaId::ALL.into_iter().map(|id| (id, 0.5)).collect();
    s
}

fn evaluate(s: &Scenario) -> ConsolidatedResult {
    s.evaluate().expect("scenario should validate")
}

#[test]
fn derived_bases_from_rate() {
    let b = derive_bases(&process(), 1.7);
    assert_eq!(b.annual_production, 2_400_000.0);
    assert_eq!(b.monthly_production, 201_600.0);
    assert_eq!(b.annual_operating_hours, 4_000.0);
    assert_eq!(b.exposed_process_people, 10);
    assert_eq!(b.exposed_inspection_people, 2);
    assert_close("downtime", b.downtime_hourly_cost, 10_000.0, 1e-12);
}

#[test]
fn monthly_volume_wins_over_rate() {
    let mut p = process();
    p.monthly_volume = Some(50_000.0);
    let b = derive_bases(&p, 1.7);
    assert_eq!(b.monthly_production, 50_000.0);
    assert_eq!(b.annual_production, 600_000.0);
}

#[test]
fn no_production_signal_yields_zero_production() {
    let mut p = process();
    p.production_rate_per_min = None;
    p.monthly_line_revenue = None;
    let b = derive_bases(&p, 1.7);
    assert_eq!(b.annual_production, 0.0);
    assert_eq!(b.monthly_production, 0.0);
    assert_eq!(b.downtime_hourly_cost, 0.0);
}

#[test]
fn f01_with_half_target() {
    let mut s = scenario(&[FormulaId::F01]);
    s.targets = ReductionTargets::new().with(FormulaId::F01, 0.5);
    let r = evaluate(&s);

    assert_close("labor", r.subtotal(PainCategory::Labor), 510_000.0, 1e-12);
    assert_close("cost", r.total_annual_cost, 510_000.0, 1e-12);
    assert_close("gain", r.total_annual_gain, 255_000.0, 1e-12);
    assert_eq!(r.average_investment, 500_000.0);
    assert_close("payback", r.payback_years, 1.960_784, 1e-6);
    assert_eq!(r.payback(), Some(r.payback_years));
}

#[test]
fn nothing_selected_is_all_zero() {
    let r = evaluate(&scenario(&[]));
    assert_eq!(r.total_annual_cost, 0.0);
    assert_eq!(r.total_annual_gain, 0.0);
    assert!(r.payback_years.is_infinite());
    assert_eq!(r.payback(), None);
    assert_eq!(r.roi_percent, [-100.0; 5]);
    assert!(r.categories.iter().all(|c| c.subtotal == 0.0));
    assert!(r.formulas.iter().all(|f| !f.evaluated));
}

#[test]
fn f07_is_independent_of_the_process() {
    let mut s = scenario(&[FormulaId::F07]);
    s.parameters.f07.complaints_per_year = Some(12.0);
    s.parameters.f07.cost_per_complaint = Some(2000.0);
    let r = evaluate(&s);
    assert_eq!(r.formula(FormulaId::F07).annual_cost, 24_000.0);
    assert_eq!(r.subtotal(PainCategory::Quality), 24_000.0);

    s.process.operator_salary = 9999.0;
    s.process.shifts_per_day = 3;
    assert_eq!(evaluate(&s).formula(FormulaId::F07).annual_cost, 24_000.0);
}

#[test]
fn f02_uses_clt_divisor_end_to_end() {
    let mut s = scenario(&[FormulaId::F02]);
    s.client.burden_multiplier = 2.0;
    s.process.operator_salary = 2200.0;
    s.parameters.f02.hours_per_person_month = Some(10.0);
    let r = evaluate(&s);
    assert_close("f02", r.formula(FormulaId::F02).annual_cost, 360_000.0, 1e-12);
}

#[test]
fn breakdown_labels_follow_display_order() {
    let r = evaluate(&everything());
    let quality: Vec<_> = r
        .category(PainCategory::Quality)
        .as_pairs()
        .map(|(label, _)| label.to_string())
        .collect();
    assert_eq!(
        quality,
        [
            "F05 - Refugo",
            "F05 - Retrabalho",
            "F06 - Inspeção Manual",
            "F07 - Escapes de Qualidade",
        ]
    );
    let safety = r.category(PainCategory::Safety);
    assert_eq!(safety.lines.len(), 4);
    assert_eq!(safety.lines[2].label, "F12 - Risco Legal");
    assert_close("legal", safety.lines[2].value, 20_000.0, 1e-12);
}

#[test]
fn subtotals_and_total_are_exact_sums() {
    let r = evaluate(&everything());
    for c in &r.categories {
        let sum: f64 = c.lines.iter().map(|l| l.value).sum();
        assert_eq!(c.subtotal, sum, "{:?}", c.category);
    }
    let total: f64 = r.categories.iter().map(|c| c.subtotal).sum();
    assert_eq!(r.total_annual_cost, total);
    assert!(r.formulas.iter().all(|f| f.evaluated));
}

#[test]
fn reference_values_with_all_formulas() {
    let r = evaluate(&everything());
    let hourly = 2500.0 * 1.7 / 176.0;
    let cost = |id| r.formula(id).annual_cost;

    assert_close("f01", cost(FormulaId::F01), 510_000.0, 1e-12);
    assert_close("f03", cost(FormulaId::F03), 61_200.0, 1e-12);
    assert_close("f04", cost(FormulaId::F04), 22_500.0, 1e-12);
    assert_close(
        "f05",
        cost(FormulaId::F05),
        201_600.0 * 0.02 * 15.0 * 12.0 + 201_600.0 * 0.01 * 0.1 * hourly * 12.0,
        1e-12,
    );
    assert_close("f06", cost(FormulaId::F06), 122_400.0, 1e-12);
    assert_close("f08", cost(FormulaId::F08), 316_800.0, 1e-12);
    assert_close("f09", cost(FormulaId::F09), 10.0 * 0.5 * hourly * 250.0, 1e-12);
    assert_close("f10", cost(FormulaId::F10), 960_000.0, 1e-12);
    assert_close("f11", cost(FormulaId::F11), 480_000.0, 1e-12);
    assert_close("f13", cost(FormulaId::F13), 298_800.0, 1e-12);
    assert_close("f15", cost(FormulaId::F15), 10_000.0, 1e-12);
    assert_close("f16", cost(FormulaId::F16), 20_000.0, 1e-12);
    assert_close("f17", cost(FormulaId::F17), 60_000.0, 1e-12);
    assert_close("f18", cost(FormulaId::F18), 2.0 * 1.5 * hourly * 250.0, 1e-12);
    assert_close("gain", r.total_annual_gain, r.total_annual_cost * 0.5, 1e-12);
}

#[test]
fn supervision_counts_every_shift() {
    let mut s = scenario(&[FormulaId::F14]);
    s.parameters.f14.supervisors_per_shift = Some(1.0);
    // 1 × 2 shifts × 5000 × 1.7 × 12
    assert_close("f14", evaluate(&s).formula(FormulaId::F14).annual_cost, 204_000.0, 1e-12);

    s.parameters.f14.supervisor_salary = Some(6000.0);
    assert_close("f14", evaluate(&s).formula(FormulaId::F14).annual_cost, 244_800.0, 1e-12);
}

#[test]
fn zero_salary_overrides_fall_back_to_the_process() {
    let mut s = scenario(&[FormulaId::F03, FormulaId::F14]);
    s.parameters.f03.hires_per_year = Some(4.0);
    s.parameters.f03.rookie_salary = Some(0.0);
    s.parameters.f03.ramp_months = Some(3.0);
    s.parameters.f03.supervisor_time_share = Some(0.2);
    s.parameters.f03.supervisor_salary = Some(0.0);
    s.parameters.f14.supervisors_per_shift = Some(1.0);
    s.parameters.f14.supervisor_salary = Some(0.0);
    let r = evaluate(&s);
    // 4 × (2500×1.7×3 + 5000×1.7×0.2×3)
    assert_close("f03", r.formula(FormulaId::F03).annual_cost, 71_400.0, 1e-12);
    // 1 × 2 shifts × 5000 × 1.7 × 12
    assert_close("f14", r.formula(FormulaId::F14).annual_cost, 204_000.0, 1e-12);
}

#[test]
fn oversized_headcount_does_not_overflow() {
    let mut s = scenario(&[FormulaId::F01]);
    s.process.process_people_per_shift = 2_000_000_000;
    s.process.shifts_per_day = 3;
    assert!(s.evaluate().is_err());

    let b = derive_bases(&s.process, 1.7);
    assert_eq!(b.exposed_process_people, u32::MAX);
    let r = engine::calculate(
        &s.client,
        &s.process,
        &s.pains,
        &s.parameters,
        &s.investment,
        &s.targets,
    );
    assert!(r.total_annual_cost.is_finite());
    assert!(r.total_annual_cost > 0.0);
}

#[test]
fn supervision_without_headcount_contributes_nothing() {
    let r = evaluate(&scenario(&[FormulaId::F14]));
    assert!(!r.formula(FormulaId::F14).evaluated);
    assert_eq!(r.total_annual_cost, 0.0);
}

#[test]
fn stoppage_override_beats_derived_downtime() {
    let mut s = scenario(&[FormulaId::F10, FormulaId::F11]);
    s.parameters.f10.stoppages_per_month = Some(4.0);
    s.parameters.f10.hours_per_stoppage = Some(2.0);
    s.parameters.f10.downtime_cost_per_hour = Some(2500.0);
    s.parameters.f11.setups_per_month = Some(8.0);
    s.parameters.f11.hours_per_setup = Some(0.5);
    s.parameters.f11.downtime_cost_per_hour = Some(0.0);
    let r = evaluate(&s);
    assert_close("f10", r.formula(FormulaId::F10).annual_cost, 4.0 * 2.0 * 2500.0 * 12.0, 1e-12);
    // zero override falls back to revenue / 176
    assert_close("f11", r.formula(FormulaId::F11).annual_cost, 480_000.0, 1e-12);
}

#[test]
fn turnover_factor_defaults_when_zero() {
    let mut s = scenario(&[FormulaId::F04]);
    s.parameters.f04.departures_per_year = Some(6.0);
    s.parameters.f04.cost_factor = Some(0.0);
    assert_close("f04", evaluate(&s).formula(FormulaId::F04).annual_cost, 22_500.0, 1e-12);

    s.parameters.f04.cost_factor = Some(3.0);
    assert_close("f04", evaluate(&s).formula(FormulaId::F04).annual_cost, 45_000.0, 1e-12);
}

#[test]
fn percent_inputs_are_normalized_before_calculation() {
    let mut s = scenario(&[FormulaId::F08]);
    s.parameters.f08.unmet_demand_share = Some(5.0);
    s.parameters.f08.contribution_margin = Some(30.0);
    s.targets = ReductionTargets::new().with(FormulaId::F08, 50.0);
    let r = evaluate(&s);
    assert_close("f08", r.formula(FormulaId::F08).annual_cost, 316_800.0, 1e-12);
    assert_close("gain", r.total_annual_gain, 158_400.0, 1e-12);
}

#[test]
fn calculation_is_idempotent() {
    automation_roi::logging::init_test();
    let s = everything();
    assert_eq!(evaluate(&s), evaluate(&s));
}

#[test]
fn disjoint_selections_add_up() {
    let full = everything();
    let (labor, rest): (Vec<_>, Vec<_>) = FormulaId::ALL
        .into_iter()
        .partition(|id| id.category() == PainCategory::Labor);

    let mut a = full.clone();
    a.pains = labor.into_iter().collect();
    let mut b = full.clone();
    b.pains = rest.into_iter().collect();

    let (ra, rb, rf) = (evaluate(&a), evaluate(&b), evaluate(&full));
    assert_close(
        "cost",
        ra.total_annual_cost + rb.total_annual_cost,
        rf.total_annual_cost,
        1e-12,
    );
    assert_close(
        "gain",
        ra.total_annual_gain + rb.total_annual_gain,
        rf.total_annual_gain,
        1e-12,
    );
}

#[test]
fn raising_one_target_never_lowers_gain() {
    let mut s = everything();
    let mut previous = evaluate(&s).total_annual_gain;
    for step in [0.6, 0.7, 0.9, 1.0] {
        s.targets.set(FormulaId::F10, step);
        let gain = evaluate(&s).total_annual_gain;
        assert!(gain >= previous, "target {step}: {gain} < {previous}");
        previous = gain;
    }
}

#[test]
fn unselected_formula_ignores_its_parameters() {
    let mut s = everything();
    s.pains.deselect(FormulaId::F01);
    let r = evaluate(&s);
    assert_eq!(r.formula(FormulaId::F01).annual_cost, 0.0);
    let f01_line = r.category(PainCategory::Labor).line("F01 - Mão de Obra Direta").unwrap();
    assert!(!f01_line.evaluated);
    assert_eq!(f01_line.value, 0.0);
}

#[test]
fn roi_table_covers_five_years() {
    let mut s = scenario(&[FormulaId::F01]);
    s.targets = ReductionTargets::new().with(FormulaId::F01, 0.5);
    let r = evaluate(&s);
    // ((255000 × n) − 500000) / 500000 × 100
    for (n, roi) in (1..=5).zip(r.roi_percent) {
        assert_close("roi", roi, (255_000.0 * f64::from(n) - 500_000.0) / 500_000.0 * 100.0, 1e-12);
        assert_eq!(r.roi(n), Some(roi));
    }
    assert_eq!(r.roi(0), None);
    assert_eq!(r.roi(6), None);
}

#[test]
fn engine_runs_without_validation_on_incomplete_inputs() {
    let s = scenario(&[FormulaId::F02, FormulaId::F07]);
    let r = engine::calculate(
        &s.client,
        &s.process,
        &s.pains,
        &s.parameters,
        &s.investment,
        &s.targets,
    );
    assert_eq!(r.total_annual_cost, 0.0);
    assert!(r.evaluated_formulas().next().is_none());
}

#[test]
fn metadata_is_echoed() {
    let r = evaluate(&scenario(&[]));
    assert_eq!(r.sector, "area_1_linhas_montagem");
    assert_eq!(r.company_size, "media");
    assert_eq!(r.burden_multiplier, 1.7);
    assert_eq!(r.monthly_line_revenue, 1_760_000.0);
    assert_eq!(r.categories.len(), 5);
    assert_eq!(r.formulas.len(), 18);
}

#[test]
fn infinite_payback_exports_as_null() {
    let json = serde_json::to_value(evaluate(&scenario(&[]))).unwrap();
    assert!(json["payback_years"].is_null());
    assert_eq!(json["categories"][0]["category"], "labor");
    assert_eq!(json["formulas"][0]["formula"], "F01");
}

#[test]
fn selected_pains_helpers() {
    let all = SelectedPains::all();
    assert_eq!(all.len(), 18);
    assert!(SelectedPains::none().is_empty());
}
