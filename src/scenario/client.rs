use serde::{Deserialize, Serialize};

/// Client identification and the labor-burden assumption for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_name: String,
    pub project_name: String,
    /// Key into the area preset table (`areas::AREAS`)
    pub sector: String,
    /// `small`, `medium` or `large`
    pub company_size: String,
    /// Multiplier on gross salary for fully-loaded labor cost: 1.7, 1.85 or 2.0
    pub burden_multiplier: f64,
}

impl ClientProfile {
    pub fn size(&self) -> Option<CompanySize> {
        CompanySize::parse(&self.company_size)
    }
}

/// Company size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Accepts the English tiers and the Portuguese ones used by the intake form.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "small" | "pequena" => Some(CompanySize::Small),
            "medium" | "media" | "média" => Some(CompanySize::Medium),
            "large" | "grande" => Some(CompanySize::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
        }
    }
}

/// Allowed labor-burden multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurdenMultiplier {
    /// 1.7, payroll taxes only
    Conservative,
    /// 1.85
    Medium,
    /// 2.0, taxes plus full benefits
    Full,
}

impl BurdenMultiplier {
    pub const OPTIONS: [BurdenMultiplier; 3] = [
        BurdenMultiplier::Conservative,
        BurdenMultiplier::Medium,
        BurdenMultiplier::Full,
    ];

    pub fn value(self) -> f64 {
        match self {
            BurdenMultiplier::Conservative => 1.7,
            BurdenMultiplier::Medium => 1.85,
            BurdenMultiplier::Full => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BurdenMultiplier::Conservative => "Conservador (1,7x)",
            BurdenMultiplier::Medium => "Médio (1,85x)",
            BurdenMultiplier::Full => "Completo (2,0x)",
        }
    }

    /// Matches a raw factor against the allowed set.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::OPTIONS
            .into_iter()
            .find(|opt| (opt.value() - value).abs() < 1e-9)
    }
}
