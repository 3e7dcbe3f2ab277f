use serde::{Deserialize, Serialize};

/// The five top-level cost categories ("pains").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainCategory {
    Labor,
    Quality,
    Productivity,
    Safety,
    HiddenCosts,
}

impl PainCategory {
    pub const ALL: [PainCategory; 5] = [
        PainCategory::Labor,
        PainCategory::Quality,
        PainCategory::Productivity,
        PainCategory::Safety,
        PainCategory::HiddenCosts,
    ];

    /// Position of the category in [`PainCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            PainCategory::Labor => 0,
            PainCategory::Quality => 1,
            PainCategory::Productivity => 2,
            PainCategory::Safety => 3,
            PainCategory::HiddenCosts => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PainCategory::Labor => "Mão de Obra",
            PainCategory::Quality => "Qualidade",
            PainCategory::Productivity => "Produtividade",
            PainCategory::Safety => "Segurança",
            PainCategory::HiddenCosts => "Custos Ocultos",
        }
    }

    /// Formulas owned by this category, in evaluation order.
    pub fn formulas(self) -> impl Iterator<Item = FormulaId> {
        FormulaId::ALL
            .into_iter()
            .filter(move |id| id.category() == self)
    }
}

/// Identifier of one of the 18 independently selectable cost formulas.
///
/// Serialized as its code (`"F01"`..`"F18"`), which also makes it usable as a
/// TOML table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormulaId {
    F01,
    F02,
    F03,
    F04,
    F05,
    F06,
    F07,
    F08,
    F09,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
}

impl FormulaId {
    pub const ALL: [FormulaId; 18] = [
        FormulaId::F01,
        FormulaId::F02,
        FormulaId::F03,
        FormulaId::F04,
        FormulaId::F05,
        FormulaId::F06,
        FormulaId::F07,
        FormulaId::F08,
        FormulaId::F09,
        FormulaId::F10,
        FormulaId::F11,
        FormulaId::F12,
        FormulaId::F13,
        FormulaId::F14,
        FormulaId::F15,
        FormulaId::F16,
        FormulaId::F17,
        FormulaId::F18,
    ];

    pub fn code(self) -> &'static str {
        match self {
            FormulaId::F01 => "F01",
            FormulaId::F02 => "F02",
            FormulaId::F03 => "F03",
            FormulaId::F04 => "F04",
            FormulaId::F05 => "F05",
            FormulaId::F06 => "F06",
            FormulaId::F07 => "F07",
            FormulaId::F08 => "F08",
            FormulaId::F09 => "F09",
            FormulaId::F10 => "F10",
            FormulaId::F11 => "F11",
            FormulaId::F12 => "F12",
            FormulaId::F13 => "F13",
            FormulaId::F14 => "F14",
            FormulaId::F15 => "F15",
            FormulaId::F16 => "F16",
            FormulaId::F17 => "F17",
            FormulaId::F18 => "F18",
        }
    }

    /// Parses a formula code. Case-insensitive, surrounding whitespace ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        FormulaId::ALL.into_iter().find(|id| id.code() == code)
    }

    /// Static formula → category table.
    pub fn category(self) -> PainCategory {
        match self {
            FormulaId::F01 | FormulaId::F02 | FormulaId::F03 | FormulaId::F04 => {
                PainCategory::Labor
            }
            FormulaId::F05 | FormulaId::F06 | FormulaId::F07 => PainCategory::Quality,
            FormulaId::F08 | FormulaId::F09 | FormulaId::F10 | FormulaId::F11 => {
                PainCategory::Productivity
            }
            FormulaId::F12 | FormulaId::F13 => PainCategory::Safety,
            FormulaId::F14
            | FormulaId::F15
            | FormulaId::F16
            | FormulaId::F17
            | FormulaId::F18 => PainCategory::HiddenCosts,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormulaId::F01 => "Mão de Obra Direta",
            FormulaId::F02 => "Horas Extras",
            FormulaId::F03 => "Curva de Aprendizagem",
            FormulaId::F04 => "Turnover",
            FormulaId::F05 => "Refugo e Retrabalho",
            FormulaId::F06 => "Inspeção Manual",
            FormulaId::F07 => "Escapes de Qualidade",
            FormulaId::F08 => "Custo de Oportunidade",
            FormulaId::F09 => "Ociosidade Silenciosa",
            FormulaId::F10 => "Paradas de Linha",
            FormulaId::F11 => "Setup/Changeover",
            FormulaId::F12 => "Riscos e Acidentes",
            FormulaId::F13 => "Frota de Empilhadeiras",
            FormulaId::F14 => "Supervisão",
            FormulaId::F15 => "Compliance/EPIs",
            FormulaId::F16 => "Energia e Utilidades",
            FormulaId::F17 => "Espaço Físico",
            FormulaId::F18 => "Gestão de Dados",
        }
    }
}

impl std::fmt::Display for FormulaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not a known formula code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown formula code: {0}")]
pub struct UnknownFormula(pub String);

impl TryFrom<String> for FormulaId {
    type Error = UnknownFormula;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FormulaId::from_code(&value).ok_or(UnknownFormula(value))
    }
}

impl From<FormulaId> for String {
    fn from(value: FormulaId) -> Self {
        value.code().to_string()
    }
}
