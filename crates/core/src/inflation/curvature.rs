//! Reconciliation of average-period and end-of-period annual inflation.
//!
//! An annual average rate and an end-of-period rate describe the same year
//! from two angles. Linear interpolation between end-of-period index levels
//! honors the second but ignores the first; bending the monthly path with a
//! quadratic term `t(1-t)` keeps both endpoints fixed and moves the mean of
//! the twelve monthly levels toward the level implied by the average rate.
//!
//! The bend is a least-squares style correction on a single quadratic basis
//! and an approximation: endpoints are exact, the mean is pulled toward the
//! target, nothing more is guaranteed.

use std::collections::BTreeMap;

use log::debug;
use wealthfolio_economic_data::DualRateSeries;

use super::inflation_model::{Granularity, InflationPoint};
use crate::constants::{INDEX_BASE, MONTHS_PER_YEAR};

const STEPS: usize = MONTHS_PER_YEAR as usize;

/// Fractional positions `k/12` for `k = 1..=12`.
fn monthly_positions() -> [f64; STEPS] {
    let mut positions = [0.0; STEPS];
    for (k, position) in positions.iter_mut().enumerate() {
        *position = (k + 1) as f64 / STEPS as f64;
    }
    positions
}

/// Mean of the monthly positions and mean of `t(1-t)` over them.
fn position_moments(positions: &[f64; STEPS]) -> (f64, f64) {
    let mean = positions.iter().sum::<f64>() / STEPS as f64;
    let spread = positions.iter().map(|t| t * (1.0 - t)).sum::<f64>() / STEPS as f64;
    (mean, spread)
}

/// Twelve monthly index levels between `start_index` and `end_index` whose
/// mean is pulled toward `average_index`.
///
/// Flat (twelve copies of `start_index`) when the bounds are equal or not
/// finite, or when the average is not finite.
pub fn interpolate_monthly_indexes(start_index: f64, end_index: f64, average_index: f64) -> Vec<f64> {
    let delta = end_index - start_index;
    if !start_index.is_finite()
        || !end_index.is_finite()
        || !average_index.is_finite()
        || delta == 0.0
    {
        return vec![start_index; STEPS];
    }

    let positions = monthly_positions();
    let (mean, spread) = position_moments(&positions);

    let target_mean = (average_index - start_index) / delta;
    let curvature = if target_mean.is_finite() && spread != 0.0 {
        (target_mean - mean) / spread
    } else {
        0.0
    };

    positions
        .iter()
        .map(|t| {
            let adjusted = t + curvature * t * (1.0 - t);
            start_index + delta * adjusted
        })
        .collect()
}

/// Monthly percent-change observations reconciled from annual average and
/// end-of-period rates.
///
/// Only years present in both maps are used, ascending. Each year chains the
/// average and end-of-period index levels from the previous used year
/// (starting at 100), interpolates twelve monthly levels and emits the change
/// from the previous month as `YYYY-MM` observations. A year with a
/// non-finite rate is skipped without advancing the chain.
pub fn build_dual_rate_monthly_series(
    average_rates: &BTreeMap<i32, f64>,
    end_of_period_rates: &BTreeMap<i32, f64>,
) -> Vec<InflationPoint> {
    let mut average_index_prev = INDEX_BASE;
    let mut end_index_prev = INDEX_BASE;
    let mut last_index = end_index_prev;
    let mut points = Vec::new();

    for (year, average_rate) in average_rates {
        let Some(end_rate) = end_of_period_rates.get(year) else {
            continue;
        };
        if !average_rate.is_finite() || !end_rate.is_finite() {
            continue;
        }

        let average_index = average_index_prev * (1.0 + average_rate / 100.0);
        let end_index = end_index_prev * (1.0 + end_rate / 100.0);
        let monthly_indexes = interpolate_monthly_indexes(end_index_prev, end_index, average_index);

        for (month, index_value) in (1..=MONTHS_PER_YEAR).zip(monthly_indexes) {
            let change_percent = if last_index != 0.0 {
                (index_value - last_index) / last_index * 100.0
            } else {
                0.0
            };
            points.push(InflationPoint::new(
                format!("{}-{:02}", year, month),
                change_percent,
            ));
            last_index = index_value;
        }

        average_index_prev = average_index;
        end_index_prev = end_index;
    }

    points
}

/// Resolve a dual-rate series to observations and their granularity.
///
/// Reconciled monthly changes when at least one year has both rates,
/// otherwise the annual values of the indicator that was asked for.
pub fn reconcile_dual_rate(series: &DualRateSeries) -> (Vec<InflationPoint>, Granularity) {
    let monthly = build_dual_rate_monthly_series(&series.average, &series.end_of_period);
    if !monthly.is_empty() {
        debug!("Reconciled {} monthly inflation changes", monthly.len());
        return (monthly, Granularity::Month);
    }

    debug!("No overlapping average/end-of-period years, using annual rates");
    (series.requested_observations(), Granularity::Year)
}
