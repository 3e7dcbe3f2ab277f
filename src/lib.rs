//! Cost-of-inaction engine for industrial automation proposals.
//!
//! The library holds every calculation; the binary only parses arguments,
//! loads files and prints.

pub mod app;
pub mod areas;
pub mod config;
pub mod derived;
pub mod engine;
pub mod formula;
pub mod formulas;
pub mod i18n;
pub mod legacy;
pub mod logging;
pub mod money;
pub mod scenario;
pub mod ui_cli;
pub mod validation;

pub use engine::{calculate, ConsolidatedResult};
pub use scenario::Scenario;
