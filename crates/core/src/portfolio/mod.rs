//! Portfolio valuation series used by the inflation comparison.

pub mod valuation;

pub use valuation::*;
