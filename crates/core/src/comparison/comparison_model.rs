//! Comparison output models.

use serde::{Deserialize, Serialize};
use wealthfolio_economic_data::MetricDefinition;

use crate::inflation::Resolution;

/// Portfolio value next to its inflation-adjusted counterpart for one period.
///
/// `inflation_index` is rebased so the first point of a sequence is exactly
/// 100, and `real = nominal / (inflation_index / 100)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
    pub period: String,
    pub nominal: f64,
    pub real: f64,
    pub inflation_index: f64,
    pub net_contribution: f64,
}

/// Profit percent minus inflation percent for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExcessReturnPoint {
    pub period: String,
    pub outperformance: f64,
}

/// Profit percent ("interest on money") and inflation percent side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterestPoint {
    pub period: String,
    pub interest: f64,
    pub inflation: f64,
}

/// First-to-last percent changes and latest values of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub nominal_change: f64,
    pub real_change: f64,
    pub inflation_change: f64,
    pub latest_nominal: f64,
    pub latest_real: f64,
    pub latest_inflation_index: f64,
}

/// Everything the presentation layer needs for one comparison view.
///
/// An empty `points` list means the two series never overlapped. `stats` is
/// `None` when fewer than two points exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub metric: MetricDefinition,
    pub resolution: Resolution,
    pub points: Vec<ComparisonPoint>,
    pub excess_returns: Vec<ExcessReturnPoint>,
    pub interest: Vec<InterestPoint>,
    pub stats: Option<ComparisonStats>,
}

impl ComparisonReport {
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }
}
