//! Formula library: stateless cost formulas grouped by pain, shared base
//! quantities and financial indicators.

pub mod bases;
pub mod hidden;
pub mod indicators;
pub mod labor;
pub mod productivity;
pub mod quality;
pub mod safety;

pub use bases::*;
pub use indicators::*;
