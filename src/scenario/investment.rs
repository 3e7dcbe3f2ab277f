use serde::{Deserialize, Serialize};

/// Estimated automation investment range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRange {
    pub min: f64,
    pub max: f64,
}

impl InvestmentRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The only investment figure used downstream.
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}
