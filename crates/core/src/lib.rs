//! Wealthfolio Inflation Core - inflation benchmark normalization and
//! portfolio comparison.
//!
//! This crate turns economic-data observations into a rebased inflation
//! index, builds dense portfolio valuation series and aligns the two into a
//! purchasing-power-adjusted view of performance. The series algorithms are
//! pure and never fail; I/O happens only in the comparison service, through
//! the provider registry and a [`ValuationSourceTrait`] implementation.

pub mod comparison;
pub mod constants;
pub mod errors;
pub mod inflation;
pub mod portfolio;
pub mod settings;
pub mod utils;

pub use comparison::{
    ComparisonPoint, ComparisonReport, ComparisonService, ComparisonServiceTrait, ComparisonStats,
};
pub use portfolio::*;
pub use settings::{InflationSettings, RangeOption, RangeSpec};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
