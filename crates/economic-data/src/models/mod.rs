//! Economic data models
//!
//! - `observation` - Raw `{date, value}` observations and how to interpret them
//! - `metric` - Indicator catalog entries (MetricDefinition)
//! - `request` - Provider request parameters (SeriesRequest)
//! - `series` - Normalized provider output (ProviderSeries)

mod metric;
mod observation;
mod request;
mod series;

pub use metric::MetricDefinition;
pub use observation::{Frequency, Granularity, InflationSource, Observation, ValueKind};
pub use request::SeriesRequest;
pub use series::{DualRateIndicator, DualRateSeries, ProviderSeries};
