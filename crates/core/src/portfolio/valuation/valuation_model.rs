//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A valuation snapshot as reported by the portfolio valuation source.
///
/// `net_contribution` is the cumulative net capital invested as of the
/// snapshot, not a delta. Missing contributions count as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSnapshot {
    pub valuation_date: String,
    pub total_value: Decimal,
    #[serde(default)]
    pub net_contribution: Option<Decimal>,
}

impl ValuationSnapshot {
    pub fn new(
        valuation_date: impl Into<String>,
        total_value: Decimal,
        net_contribution: Option<Decimal>,
    ) -> Self {
        Self {
            valuation_date: valuation_date.into(),
            total_value,
            net_contribution,
        }
    }
}

/// A point of a dense (gap-free) daily or monthly portfolio series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub date: String,
    pub total_value: Decimal,
    pub net_contribution: Decimal,
}
