//! Portfolio versus inflation comparison.
//!
//! Aligns a dense portfolio series with an expanded inflation index and
//! derives real value, excess return and summary statistics.

mod comparison_calculator;
mod comparison_metrics;
mod comparison_model;
mod comparison_service;
mod comparison_traits;

pub use comparison_calculator::build_comparison_series;
pub use comparison_metrics::*;
pub use comparison_model::*;
pub use comparison_service::*;
pub use comparison_traits::*;
