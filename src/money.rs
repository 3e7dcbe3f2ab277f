//! pt-BR number rendering: `.` groups thousands, `,` separates decimals.
//!
//! Only presentation code calls these; results stay raw `f64`.

use num_format::{CustomFormat, Grouping, ToFormattedString};

fn grouping() -> CustomFormat {
    CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator(".")
        .minus_sign("-")
        .build()
        .unwrap_or_default()
}

/// Renders `value` with `decimals` digits after the comma, e.g. `1.234,5`.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * scale).round();
    // past this the cast would saturate
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        return "N/A".to_string();
    }
    let scaled = scaled as u128;
    let unit = 10u128.pow(decimals as u32);
    let integer = (scaled / unit).to_formatted_string(&grouping());
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer},{:0width$}", scaled % unit, width = decimals)
    }
}

/// `R$ 1.234,56`; negative values read `-R$ 1.234,56`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let body = format_decimal(value.abs(), 2);
    if body == "N/A" {
        return body;
    }
    if value < 0.0 && body != "0,00" {
        format!("-{symbol} {body}")
    } else {
        format!("{symbol} {body}")
    }
}

/// `12,5%` style with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 1))
}

/// Payback years with two decimals, `N/A` when it never pays back.
pub fn format_payback(years: f64) -> String {
    if years.is_finite() {
        format_decimal(years, 2)
    } else {
        "N/A".to_string()
    }
}
