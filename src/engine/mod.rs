//! Calculation orchestrator for the revised model.

mod orchestrator;
pub mod registry;
pub mod result;

pub use orchestrator::calculate;
pub use result::{BreakdownLine, CategoryResult, ConsolidatedResult, FormulaOutcome, ROI_YEARS};
