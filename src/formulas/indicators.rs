//! Financial indicators shared by both model versions.

/// Simple payback in years. Positive infinity when there is no gain.
pub fn payback_years(investment: f64, annual_gain: f64) -> f64 {
    if annual_gain == 0.0 {
        f64::INFINITY
    } else {
        investment / annual_gain
    }
}

/// ROI in percent after `years`: `((gain × years) − investment) / investment × 100`.
///
/// Zero investment yields 0 instead of dividing by zero.
pub fn roi_percent(investment: f64, annual_gain: f64, years: u32) -> f64 {
    if investment == 0.0 {
        return 0.0;
    }
    ((annual_gain * f64::from(years)) - investment) / investment * 100.0
}

/// Annual gain of one cost line after automation.
pub fn annual_gain(current_annual_cost: f64, reduction_target: f64) -> f64 {
    current_annual_cost * reduction_target
}
