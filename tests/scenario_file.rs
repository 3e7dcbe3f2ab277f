use automation_roi::app::template_scenario;
use automation_roi::config::{self, Config};
use automation_roi::formula::{FormulaId, PainCategory};
use automation_roi::legacy::{self, LegacyConstants, LegacyItem};
use automation_roi::scenario::{self, ScenarioFile};

const REVISED: &str = r#"
model = "revised"
pains = ["F01", "F07", "F10"]

[client]
client_name = "Metalúrgica Exemplo"
project_name = "Célula de solda"
sector = "area_6_robotica"
company_size = "medium"
burden_multiplier = 1.7

[process]
production_rate_per_min = 10
shift_hours = 8
shifts_per_day = 2
operating_days_per_year = 250
process_people_per_shift = 5
inspection_people_per_shift = 1
operator_salary = 2500
inspector_salary = 3000
supervisor_salary = 5000
raw_material_cost_per_unit = 15
unit_cost = 100
monthly_line_revenue = 1760000

[investment]
min = 400000
max = 600000

[targets]
F01 = 0.5
F07 = 80
F10 = 0.3

[parameters.f07]
complaints_per_year = 12
cost_per_complaint = 2000

[parameters.f10]
stoppages_per_month = 4
hours_per_stoppage = 2
"#;

const LEGACY: &str = r#"
model = "legacy"
pains = ["CO1", "QL3", "SE2"]

[client]
client_name = "Cliente"
project_name = "Projeto"
sector = "Alimentos"

[process]
production_rate_per_min = 10
shift_hours = 8
shifts_per_day = 2
operating_days_per_year = 250
process_people_per_shift = 10
inspection_people_per_shift = 2
unit_cost = 100
material_fraction = 0.6

[investment]
min = 300000
max = 500000

[targets]
CO1 = 0.4

[parameters.se]
departures_per_year = 3
"#;

#[test]
fn revised_scenario_from_toml() {
    let ScenarioFile::Revised(s) = ScenarioFile::from_toml_str(REVISED).unwrap() else {
        panic!("expected the revised model");
    };
    assert_eq!(s.pains.len(), 3);
    assert!(s.pains.is_selected(FormulaId::F10));
    assert_eq!(s.parameters.f10.downtime_cost_per_hour, None);

    let r = s.evaluate().unwrap();
    assert!((r.subtotal(PainCategory::Labor) - 510_000.0).abs() < 1e-6);
    assert_eq!(r.formula(FormulaId::F07).annual_cost, 24_000.0);
    assert!((r.formula(FormulaId::F10).annual_cost - 960_000.0).abs() < 1e-6);
    // 255000 + 19200 + 288000
    assert!((r.total_annual_gain - 562_200.0).abs() < 1e-6);
}

#[test]
fn legacy_scenario_from_toml() {
    let ScenarioFile::Legacy(s) = ScenarioFile::from_toml_str(LEGACY).unwrap() else {
        panic!("expected the legacy model");
    };
    assert!(s.pains.is_selected(LegacyItem::Ql3));
    let valid = legacy::validate_legacy(&s).unwrap();
    let r = legacy::calculate_legacy(&valid, &LegacyConstants::default());
    assert_eq!(r.item(LegacyItem::Co1), 1_200_000.0);
    assert_eq!(r.item(LegacyItem::Ql3), 240_000.0);
    assert_eq!(r.item(LegacyItem::Se2), 30_000.0);
    assert!((r.total_annual_gain - 480_000.0).abs() < 1e-6);
}

#[test]
fn missing_model_tag_is_rejected() {
    let without_tag = REVISED.replace("model = \"revised\"", "");
    assert!(ScenarioFile::from_toml_str(&without_tag).is_err());
}

#[test]
fn unknown_formula_code_is_rejected() {
    let bad = REVISED.replace("\"F10\"]", "\"F19\"]");
    assert!(ScenarioFile::from_toml_str(&bad).is_err());
}

#[test]
fn save_then_load_keeps_the_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    let original = ScenarioFile::from_toml_str(REVISED).unwrap();

    scenario::save_scenario(&path, &original).unwrap();
    let loaded = scenario::load_scenario(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn legacy_file_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.toml");
    let original = ScenarioFile::from_toml_str(LEGACY).unwrap();

    scenario::save_scenario(&path, &original).unwrap();
    assert_eq!(scenario::load_scenario(&path).unwrap(), original);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scenario::load_scenario(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, scenario::ScenarioError::Io(_)));
}

#[test]
fn template_preselects_area_formulas() {
    let cfg = Config::default();
    let s = template_scenario(Some("AREA_5_LOGISTICA_INTERNA"), &cfg).unwrap();
    let selected: Vec<_> = s.pains.iter().collect();
    assert_eq!(
        selected,
        [FormulaId::F08, FormulaId::F09, FormulaId::F10, FormulaId::F12, FormulaId::F13]
    );
    assert_eq!(s.targets.get(FormulaId::F13), 0.5);
    assert_eq!(s.targets.get(FormulaId::F01), 0.0);
    assert_eq!(s.client.sector, "area_5_logistica_interna");
    assert_eq!(s.process.shifts_per_day, 2);
}

#[test]
fn template_without_area_selects_nothing() {
    let s = template_scenario(None, &Config::default()).unwrap();
    assert!(s.pains.is_empty());
    assert!(template_scenario(Some("area_9"), &Config::default()).is_err());
}

#[test]
fn template_round_trips_through_toml() {
    let s = template_scenario(Some("area_3_controle_qualidade"), &Config::default()).unwrap();
    let file = ScenarioFile::Revised(s);
    let text = file.to_toml_string().unwrap();
    assert!(text.contains("model = \"revised\""));
    assert_eq!(ScenarioFile::from_toml_str(&text).unwrap(), file);
}

#[test]
fn config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default_at(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let mut changed = cfg.clone();
    changed.currency_symbol = "US$".into();
    changed.legacy.salary = 6000.0;
    changed.save_to(&path).unwrap();
    assert_eq!(config::load_or_default_at(&path).unwrap(), changed);
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n[legacy]\ndowntime_cost_per_hour = 300.0\n").unwrap();
    let cfg = config::load_or_default_at(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.legacy.downtime_cost_per_hour, 300.0);
    assert_eq!(cfg.legacy.salary, 5000.0);
    assert_eq!(cfg.template.shift_hours, 8.0);
}
