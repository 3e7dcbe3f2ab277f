use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// String keys used by the CLI.
pub mod keys {
    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_LEGACY_TITLE: &str = "report.legacy_title";
    pub const REPORT_CLIENT: &str = "report.client";
    pub const REPORT_PROJECT: &str = "report.project";
    pub const REPORT_SECTOR: &str = "report.sector";
    pub const REPORT_SIZE: &str = "report.company_size";
    pub const REPORT_BURDEN: &str = "report.burden_multiplier";
    pub const REPORT_DOWNTIME: &str = "report.downtime_hourly_cost";
    pub const REPORT_NOTHING_SELECTED: &str = "report.nothing_selected";

    pub const COL_CATEGORY: &str = "column.category";
    pub const COL_SUBTOTAL: &str = "column.subtotal";
    pub const COL_LINE: &str = "column.line";
    pub const COL_ANNUAL_COST: &str = "column.annual_cost";
    pub const COL_TARGET: &str = "column.target";
    pub const COL_GAIN: &str = "column.annual_gain";
    pub const COL_YEAR: &str = "column.year";
    pub const COL_ROI: &str = "column.roi";
    pub const COL_INDICATOR: &str = "column.indicator";
    pub const COL_VALUE: &str = "column.value";
    pub const COL_KEY: &str = "column.key";
    pub const COL_NAME: &str = "column.name";
    pub const COL_FORMULAS: &str = "column.formulas";

    pub const SUMMARY_TOTAL_COST: &str = "summary.total_annual_cost";
    pub const SUMMARY_TOTAL_GAIN: &str = "summary.total_annual_gain";
    pub const SUMMARY_AVG_INVESTMENT: &str = "summary.average_investment";
    pub const SUMMARY_PAYBACK: &str = "summary.payback_years";

    pub const VALIDATION_HEADING: &str = "validation.heading";
    pub const VALIDATION_OK: &str = "validation.ok";

    pub const AREAS_HEADING: &str = "areas.heading";
    pub const TEMPLATE_WRITTEN: &str = "template.written";
    pub const JSON_WRITTEN: &str = "export.json_written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    PtBr,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::PtBr
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-br",
            Language::En => "en",
        }
    }
}

/// Runtime string bundle: built-in strings plus optional TOML overrides.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Unknown codes fall back to pt-BR.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Like [`Translator::new`], reading `<pack_dir>/<code>.toml` (or
    /// `locales/<code>.toml`) for overrides when present.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "locale pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// Override lookup only.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides.as_ref()?.get(key).map(String::as_str)
    }

    /// Translated string; missing English strings fall back to pt-BR, unknown
    /// keys to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| pt_br(key)),
            Language::PtBr => pt_br(key),
        };
        builtin.unwrap_or(key)
    }
}

/// Picks the language code: CLI flag, then config, then system locale.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase().replace('_', "-");
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt-br".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Guesses the language from the OS locale, then `LANG`/`LC_ALL`.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .and_then(|loc| normalize_locale_string(&loc))
        .or_else(|| {
            ["LANG", "LC_ALL"]
                .into_iter()
                .filter_map(|var| std::env::var(var).ok())
                .find_map(|v| normalize_locale_string(&v))
        })
}

/// Flat `key = "value"` TOML; nested tables become dotted keys.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    try_load(lang).or_else(|| {
        let (base, _) = lang.split_once(['-', '_'])?;
        try_load(base)
    })
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    let value: toml::Value = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    walk("", &value, &mut map);
    (!map.is_empty()).then_some(map)
}

fn pt_br(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        REPORT_TITLE => "=== Custo da Inação ===",
        REPORT_LEGACY_TITLE => "=== Custo da Inação (modelo CO/QL/SE/PR) ===",
        REPORT_CLIENT => "Cliente",
        REPORT_PROJECT => "Projeto",
        REPORT_SECTOR => "Setor",
        REPORT_SIZE => "Porte",
        REPORT_BURDEN => "Encargos",
        REPORT_DOWNTIME => "Custo hora parada",
        REPORT_NOTHING_SELECTED => "Nenhuma dor selecionada.",
        COL_CATEGORY => "Dor",
        COL_SUBTOTAL => "Subtotal",
        COL_LINE => "Item",
        COL_ANNUAL_COST => "Custo anual",
        COL_TARGET => "Meta",
        COL_GAIN => "Ganho anual",
        COL_YEAR => "Ano",
        COL_ROI => "ROI",
        COL_INDICATOR => "Indicador",
        COL_VALUE => "Valor",
        COL_KEY => "Chave",
        COL_NAME => "Área",
        COL_FORMULAS => "Fórmulas",
        SUMMARY_TOTAL_COST => "Custo anual total",
        SUMMARY_TOTAL_GAIN => "Ganho anual potencial",
        SUMMARY_AVG_INVESTMENT => "Investimento médio",
        SUMMARY_PAYBACK => "Payback (anos)",
        VALIDATION_HEADING => "Erros de validação:",
        VALIDATION_OK => "Cenário válido.",
        AREAS_HEADING => "Áreas de atuação",
        TEMPLATE_WRITTEN => "Modelo de cenário gravado em",
        JSON_WRITTEN => "Resultado exportado para",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        REPORT_TITLE => "=== Cost of Inaction ===",
        REPORT_LEGACY_TITLE => "=== Cost of Inaction (CO/QL/SE/PR model) ===",
        REPORT_CLIENT => "Client",
        REPORT_PROJECT => "Project",
        REPORT_SECTOR => "Sector",
        REPORT_SIZE => "Company size",
        REPORT_BURDEN => "Labor burden",
        REPORT_DOWNTIME => "Downtime cost per hour",
        REPORT_NOTHING_SELECTED => "No pains selected.",
        COL_CATEGORY => "Pain",
        COL_SUBTOTAL => "Subtotal",
        COL_LINE => "Line",
        COL_ANNUAL_COST => "Annual cost",
        COL_TARGET => "Target",
        COL_GAIN => "Annual gain",
        COL_YEAR => "Year",
        COL_ROI => "ROI",
        COL_INDICATOR => "Indicator",
        COL_VALUE => "Value",
        COL_KEY => "Key",
        COL_NAME => "Area",
        COL_FORMULAS => "Formulas",
        SUMMARY_TOTAL_COST => "Total annual cost",
        SUMMARY_TOTAL_GAIN => "Potential annual gain",
        SUMMARY_AVG_INVESTMENT => "Average investment",
        SUMMARY_PAYBACK => "Payback (years)",
        VALIDATION_HEADING => "Validation errors:",
        VALIDATION_OK => "Scenario is valid.",
        AREAS_HEADING => "Automation areas",
        TEMPLATE_WRITTEN => "Scenario template written to",
        JSON_WRITTEN => "Result exported to",
        _ => return None,
    })
}
