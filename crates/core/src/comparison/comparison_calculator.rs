use std::collections::HashMap;

use log::debug;
use num_traits::ToPrimitive;

use super::comparison_model::ComparisonPoint;
use crate::constants::INDEX_BASE;
use crate::inflation::{sort_chronologically, InflationPoint};
use crate::portfolio::valuation::SeriesPoint;

/// A usable divisor: neither zero nor NaN.
pub(crate) fn is_nonzero(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Aligns a dense portfolio series with an inflation index on period keys.
///
/// The portfolio is walked in ascending date order. The inflation value of the
/// latest matching period is carried forward over periods without an exact
/// match, and leading periods before the first match are skipped. The first
/// inflation value seen becomes the base, so the output always starts at an
/// index of 100.
///
/// Series that never overlap produce an empty result.
///
/// # Arguments
/// * `portfolio` - Dense daily or monthly portfolio series
/// * `inflation_index` - Inflation index expanded to the same granularity
pub fn build_comparison_series(
    portfolio: &[SeriesPoint],
    inflation_index: &[InflationPoint],
) -> Vec<ComparisonPoint> {
    if portfolio.is_empty() || inflation_index.is_empty() {
        return Vec::new();
    }

    let inflation_by_period: HashMap<&str, f64> = inflation_index
        .iter()
        .map(|point| (point.date.as_str(), point.value))
        .collect();

    let mut sorted_portfolio: Vec<&SeriesPoint> = portfolio.iter().collect();
    sort_chronologically(&mut sorted_portfolio, |point| point.date.as_str());

    let mut base_inflation: Option<f64> = None;
    let mut last_inflation: Option<f64> = None;
    let mut points = Vec::with_capacity(sorted_portfolio.len());

    for point in sorted_portfolio {
        if let Some(value) = inflation_by_period.get(point.date.as_str()) {
            last_inflation = Some(*value);
        }

        let Some(current) = last_inflation else {
            continue;
        };
        let base = *base_inflation.get_or_insert(current);

        let inflation = if is_nonzero(base) {
            current / base * INDEX_BASE
        } else {
            INDEX_BASE
        };
        let deflator = inflation / INDEX_BASE;
        let nominal = point.total_value.to_f64().unwrap_or(0.0);
        let real = if is_nonzero(deflator) {
            nominal / deflator
        } else {
            nominal
        };

        points.push(ComparisonPoint {
            period: point.date.clone(),
            nominal,
            real,
            inflation_index: inflation,
            net_contribution: point.net_contribution.to_f64().unwrap_or(0.0),
        });
    }

    if points.is_empty() {
        debug!("Portfolio and inflation series do not overlap");
    }

    points
}
