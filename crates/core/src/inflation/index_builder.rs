//! Conversion of raw observations into a rebased index.

use std::collections::HashMap;

use super::inflation_model::{Granularity, InflationPoint, ValueKind};
use super::period_key::{sort_chronologically, to_period_key};
use crate::constants::INDEX_BASE;

/// Drop non-finite values and sort ascending by date.
pub fn sort_inflation_points(points: &[InflationPoint]) -> Vec<InflationPoint> {
    let mut sorted: Vec<InflationPoint> = points
        .iter()
        .filter(|point| point.value.is_finite())
        .cloned()
        .collect();
    sort_chronologically(&mut sorted, |point| point.date.as_str());
    sorted
}

/// Collapse observations onto period keys and sort them.
///
/// Points are re-dated to their period key. When several observations fall
/// into the same period the last one in input order wins.
pub fn normalize_inflation_series(
    points: &[InflationPoint],
    granularity: Granularity,
) -> Vec<InflationPoint> {
    let mut by_period: HashMap<String, f64> = HashMap::with_capacity(points.len());
    for point in points {
        by_period.insert(to_period_key(&point.date, granularity), point.value);
    }

    let mut normalized: Vec<InflationPoint> = by_period
        .into_iter()
        .map(|(date, value)| InflationPoint { date, value })
        .collect();
    sort_chronologically(&mut normalized, |point| point.date.as_str());
    normalized
}

/// Build an index rebased to 100 from observations of the given kind.
///
/// Index levels are divided by the first level (a zero or non-finite first
/// level counts as 1). Percent changes are compounded from 100, one output
/// point per input point.
pub fn build_inflation_index(points: &[InflationPoint], kind: ValueKind) -> Vec<InflationPoint> {
    let mut sorted = points.to_vec();
    sort_chronologically(&mut sorted, |point| point.date.as_str());

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    match kind {
        ValueKind::Index => {
            let base = if first.value != 0.0 && first.value.is_finite() {
                first.value
            } else {
                1.0
            };
            sorted
                .into_iter()
                .map(|point| InflationPoint {
                    value: (point.value / base) * INDEX_BASE,
                    date: point.date,
                })
                .collect()
        }
        ValueKind::Percent => {
            let mut index = INDEX_BASE;
            sorted
                .into_iter()
                .map(|point| {
                    index *= 1.0 + point.value / 100.0;
                    InflationPoint {
                        date: point.date,
                        value: index,
                    }
                })
                .collect()
        }
    }
}
