//! Inflation series normalization.
//!
//! Turns raw provider observations into a rebased index and expands it to the
//! granularity of the portfolio series:
//!
//! ```text
//! observations -> normalize (period keys) -> build index -> expand (month/day)
//!                      ^
//!   dual-rate maps -> reconcile (curvature interpolation)
//! ```

mod curvature;
mod index_builder;
mod inflation_model;
mod period_key;
mod series_expander;

pub use curvature::{build_dual_rate_monthly_series, interpolate_monthly_indexes, reconcile_dual_rate};
pub use index_builder::{build_inflation_index, normalize_inflation_series, sort_inflation_points};
pub use inflation_model::*;
pub use period_key::{chronological_key, sort_chronologically, to_period_key};
pub use series_expander::{expand_inflation_index, expand_to_daily, expand_to_monthly};
