//! Legacy four-category model (CO/QL/SE/PR).
//!
//! Kept next to the revised model behind the scenario `model` tag. The two
//! never share formulas: categories differ and the legacy model has no labor
//! burden.

mod calculator;
pub mod formulas;
mod model;

pub use calculator::{calculate_legacy, legacy_bases, validate_legacy, LegacyBases};
pub use model::{
    LegacyCategory, LegacyCategoryResult, LegacyClient, LegacyConstants, LegacyItem, LegacyLine,
    LegacyParameters, LegacyPains, LegacyProcess, LegacyProductivityParams, LegacyQualityParams,
    LegacyResult, LegacySafetyParams, LegacyScenario, LegacyTargets, OperationalParams,
    UnknownLegacyItem,
};
