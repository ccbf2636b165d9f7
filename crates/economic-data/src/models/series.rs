use std::collections::BTreeMap;

use super::observation::{Granularity, Observation};

/// Which of the two IMF annual rates the caller originally asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DualRateIndicator {
    /// Average-over-period inflation (`PCPIPCH`).
    Average,
    /// End-of-period inflation (`PCPIEPCH`).
    EndOfPeriod,
}

/// Annual average and end-of-period inflation rates, keyed by year.
///
/// The inflation core reconciles the two into a monthly series. When they
/// cannot be reconciled it falls back to the annual values of `requested`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualRateSeries {
    pub average: BTreeMap<i32, f64>,
    pub end_of_period: BTreeMap<i32, f64>,
    pub requested: Option<DualRateIndicator>,
}

impl DualRateSeries {
    /// Annual observations of the requested indicator, sorted by year.
    pub fn requested_observations(&self) -> Vec<Observation> {
        let values = match self.requested {
            Some(DualRateIndicator::EndOfPeriod) => &self.end_of_period,
            _ => &self.average,
        };
        values
            .iter()
            .map(|(year, value)| Observation::new(year.to_string(), *value))
            .collect()
    }
}

/// Provider output after normalization to the common observation shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderSeries {
    /// Plain observations at a known granularity.
    Observations {
        points: Vec<Observation>,
        granularity: Granularity,
    },
    /// Two correlated annual rates that must be reconciled into months.
    DualRate(DualRateSeries),
}

impl ProviderSeries {
    pub fn is_empty(&self) -> bool {
        match self {
            ProviderSeries::Observations { points, .. } => points.is_empty(),
            ProviderSeries::DualRate(series) => {
                series.average.is_empty() && series.end_of_period.is_empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ProviderSeries::Observations { points, .. } => points.len(),
            ProviderSeries::DualRate(series) => {
                series.average.len().max(series.end_of_period.len())
            }
        }
    }
}
