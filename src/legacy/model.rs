use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::engine::result::finite_or_null;
use crate::scenario::{normalize_fraction, InvestmentRange};

/// The four legacy cost categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyCategory {
    Operational,
    Quality,
    Safety,
    Productivity,
}

impl LegacyCategory {
    pub const ALL: [LegacyCategory; 4] = [
        LegacyCategory::Operational,
        LegacyCategory::Quality,
        LegacyCategory::Safety,
        LegacyCategory::Productivity,
    ];

    pub fn index(self) -> usize {
        match self {
            LegacyCategory::Operational => 0,
            LegacyCategory::Quality => 1,
            LegacyCategory::Safety => 2,
            LegacyCategory::Productivity => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegacyCategory::Operational => "Custos Operacionais",
            LegacyCategory::Quality => "Qualidade",
            LegacyCategory::Safety => "Segurança e Ergonomia",
            LegacyCategory::Productivity => "Produtividade",
        }
    }
}

/// One cost line of the legacy model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LegacyItem {
    Co1,
    Co2,
    Co3,
    Co4,
    Ql1,
    Ql2,
    Ql3,
    Ql4,
    Ql5,
    Se1,
    Se2,
    Se3,
    Se4,
    Pr1,
    Pr2,
    Pr3,
    Pr4,
}

impl LegacyItem {
    pub const ALL: [LegacyItem; 17] = [
        LegacyItem::Co1,
        LegacyItem::Co2,
        LegacyItem::Co3,
        LegacyItem::Co4,
        LegacyItem::Ql1,
        LegacyItem::Ql2,
        LegacyItem::Ql3,
        LegacyItem::Ql4,
        LegacyItem::Ql5,
        LegacyItem::Se1,
        LegacyItem::Se2,
        LegacyItem::Se3,
        LegacyItem::Se4,
        LegacyItem::Pr1,
        LegacyItem::Pr2,
        LegacyItem::Pr3,
        LegacyItem::Pr4,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LegacyItem::Co1 => "CO1",
            LegacyItem::Co2 => "CO2",
            LegacyItem::Co3 => "CO3",
            LegacyItem::Co4 => "CO4",
            LegacyItem::Ql1 => "QL1",
            LegacyItem::Ql2 => "QL2",
            LegacyItem::Ql3 => "QL3",
            LegacyItem::Ql4 => "QL4",
            LegacyItem::Ql5 => "QL5",
            LegacyItem::Se1 => "SE1",
            LegacyItem::Se2 => "SE2",
            LegacyItem::Se3 => "SE3",
            LegacyItem::Se4 => "SE4",
            LegacyItem::Pr1 => "PR1",
            LegacyItem::Pr2 => "PR2",
            LegacyItem::Pr3 => "PR3",
            LegacyItem::Pr4 => "PR4",
        }
    }

    /// Accepts `CO1` as well as `co-1`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase().replace('-', "");
        LegacyItem::ALL.into_iter().find(|item| item.code() == code)
    }

    pub fn category(self) -> LegacyCategory {
        match self {
            LegacyItem::Co1 | LegacyItem::Co2 | LegacyItem::Co3 | LegacyItem::Co4 => {
                LegacyCategory::Operational
            }
            LegacyItem::Ql1
            | LegacyItem::Ql2
            | LegacyItem::Ql3
            | LegacyItem::Ql4
            | LegacyItem::Ql5 => LegacyCategory::Quality,
            LegacyItem::Se1 | LegacyItem::Se2 | LegacyItem::Se3 | LegacyItem::Se4 => {
                LegacyCategory::Safety
            }
            LegacyItem::Pr1 | LegacyItem::Pr2 | LegacyItem::Pr3 | LegacyItem::Pr4 => {
                LegacyCategory::Productivity
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LegacyItem::Co1 => "Folha de Pagamento Direta",
            LegacyItem::Co2 => "Terceirização de Produção",
            LegacyItem::Co3 => "Desperdício de Insumos",
            LegacyItem::Co4 => "Manutenção Corretiva",
            LegacyItem::Ql1 => "Retrabalho Interno",
            LegacyItem::Ql2 => "Refugo / Scrap",
            LegacyItem::Ql3 => "Inspeção Manual 100%",
            LegacyItem::Ql4 => "Logística Reversa / Garantias",
            LegacyItem::Ql5 => "Multas Contratuais de Qualidade",
            LegacyItem::Se1 => "Absenteísmo",
            LegacyItem::Se2 => "Turnover",
            LegacyItem::Se3 => "Treinamentos Recorrentes",
            LegacyItem::Se4 => "Passivo Jurídico / Multas",
            LegacyItem::Pr1 => "Horas Extras Recorrentes",
            LegacyItem::Pr2 => "Aumento de Headcount",
            LegacyItem::Pr3 => "Vendas Perdidas",
            LegacyItem::Pr4 => "Multas por Atraso",
        }
    }
}

impl std::fmt::Display for LegacyItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown legacy item code: {0}")]
pub struct UnknownLegacyItem(pub String);

impl TryFrom<String> for LegacyItem {
    type Error = UnknownLegacyItem;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LegacyItem::from_code(&value).ok_or(UnknownLegacyItem(value))
    }
}

impl From<LegacyItem> for String {
    fn from(value: LegacyItem) -> Self {
        value.code().to_string()
    }
}

/// Fixed cost assumptions of the legacy model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConstants {
    /// Reference monthly salary [R$]
    pub salary: f64,
    pub hours_per_month: f64,
    pub downtime_cost_per_hour: f64,
    pub reverse_logistics_cost_per_unit: f64,
    pub quality_fine: f64,
    pub training_cost: f64,
    pub delay_fine: f64,
    /// Termination cost in salaries
    pub termination_factor: f64,
    /// Labor-lawsuit provision in salaries
    pub legal_provision_factor: f64,
    pub overtime_factor: f64,
}

impl Default for LegacyConstants {
    fn default() -> Self {
        Self {
            salary: 5000.0,
            hours_per_month: 220.0,
            downtime_cost_per_hour: 150.0,
            reverse_logistics_cost_per_unit: 15.0,
            quality_fine: 500.0,
            training_cost: 1200.0,
            delay_fine: 1000.0,
            termination_factor: 2.0,
            legal_provision_factor: 7.0,
            overtime_factor: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyClient {
    pub client_name: String,
    pub project_name: String,
    pub sector: String,
}

/// Process description of the legacy model. Production is always a rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyProcess {
    /// Units per minute
    pub production_rate_per_min: f64,
    pub shift_hours: f64,
    pub shifts_per_day: u32,
    pub operating_days_per_year: u32,
    pub process_people_per_shift: u32,
    #[serde(default)]
    pub inspection_people_per_shift: u32,
    pub unit_cost: f64,
    /// Share of the unit cost that is raw material (0..1)
    pub material_fraction: f64,
}

/// Selected legacy items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyPains(BTreeSet<LegacyItem>);

impl LegacyPains {
    pub fn is_selected(&self, item: LegacyItem) -> bool {
        self.0.contains(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = LegacyItem> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<LegacyItem> for LegacyPains {
    fn from_iter<T: IntoIterator<Item = LegacyItem>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reduction target per legacy item, missing entries are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyTargets(BTreeMap<LegacyItem, f64>);

impl LegacyTargets {
    pub fn get(&self, item: LegacyItem) -> f64 {
        self.0.get(&item).copied().unwrap_or(0.0)
    }

    pub fn with(mut self, item: LegacyItem, target: f64) -> Self {
        self.0.insert(item, target);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (LegacyItem, f64)> + '_ {
        self.0.iter().map(|(item, t)| (*item, *t))
    }

    pub fn normalized(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(item, t)| (*item, normalize_fraction(*t)))
                .collect(),
        )
    }
}

/// Operational cost inputs (CO2..CO4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalParams {
    pub outsourced_volume_per_month: Option<f64>,
    pub outsourced_unit_cost: Option<f64>,
    pub outsourced_months: Option<f64>,
    /// Fraction
    pub waste_rate: Option<f64>,
    pub stoppages_per_month: Option<f64>,
    pub minutes_per_stoppage: Option<f64>,
}

/// Quality inputs (QL1, QL2, QL4, QL5).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyQualityParams {
    /// Fraction
    pub rework_rate: Option<f64>,
    /// Share of the unit cost spent reworking one unit
    pub rework_factor: Option<f64>,
    /// Fraction
    pub scrap_rate: Option<f64>,
    /// Fraction
    pub return_rate: Option<f64>,
    pub fines_per_year: Option<f64>,
}

/// Safety and ergonomics inputs (SE1..SE4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacySafetyParams {
    pub absentee_days_per_year: Option<f64>,
    /// Shared by SE2 and SE3
    pub departures_per_year: Option<f64>,
    pub lawsuits_per_year: Option<f64>,
}

/// Productivity inputs (PR1..PR4).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyProductivityParams {
    pub overtime_hours_per_person_month: Option<f64>,
    pub extra_headcount: Option<f64>,
    pub unmet_demand_per_month: Option<f64>,
    pub margin_per_unit: Option<f64>,
    pub delay_fines_per_year: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyParameters {
    pub co: OperationalParams,
    pub ql: LegacyQualityParams,
    pub se: LegacySafetyParams,
    pub pr: LegacyProductivityParams,
}

impl LegacyParameters {
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        let norm = |v: Option<f64>| v.map(normalize_fraction);
        out.co.waste_rate = norm(self.co.waste_rate);
        out.ql.rework_rate = norm(self.ql.rework_rate);
        out.ql.scrap_rate = norm(self.ql.scrap_rate);
        out.ql.return_rate = norm(self.ql.return_rate);
        out
    }
}

/// Inputs of one legacy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyScenario {
    #[serde(default)]
    pub pains: LegacyPains,
    pub client: LegacyClient,
    pub process: LegacyProcess,
    pub investment: InvestmentRange,
    #[serde(default)]
    pub targets: LegacyTargets,
    #[serde(default)]
    pub parameters: LegacyParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyLine {
    pub item: LegacyItem,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyCategoryResult {
    pub category: LegacyCategory,
    pub subtotal: f64,
    pub lines: Vec<LegacyLine>,
}

/// Output of the legacy model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyResult {
    pub categories: Vec<LegacyCategoryResult>,
    pub total_annual_cost: f64,
    pub total_annual_gain: f64,
    pub average_investment: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub payback_years: f64,
    pub roi_1_year: f64,
    pub roi_3_years: f64,
    pub roi_5_years: f64,
}

impl LegacyResult {
    pub fn subtotal(&self, category: LegacyCategory) -> f64 {
        self.categories[category.index()].subtotal
    }

    /// Value of one item; 0 when it was not evaluated.
    pub fn item(&self, item: LegacyItem) -> f64 {
        self.categories[item.category().index()]
            .lines
            .iter()
            .find(|l| l.item == item)
            .map_or(0.0, |l| l.value)
    }
}
