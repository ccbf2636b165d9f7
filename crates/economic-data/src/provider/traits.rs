//! Economic data provider trait definitions.

use async_trait::async_trait;

use crate::errors::EconomicDataError;
use crate::models::{InflationSource, MetricDefinition, ProviderSeries, SeriesRequest};

/// Trait for inflation data providers.
///
/// Implement this trait to add support for a new economic data source. A
/// provider fetches one indicator for one country and returns it already
/// normalized to [`ProviderSeries`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use wealthfolio_economic_data::provider::InflationProvider;
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl InflationProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     fn source(&self) -> InflationSource {
///         InflationSource::WorldBank
///     }
///
///     fn metrics(&self) -> &'static [MetricDefinition] {
///         &[]
///     }
///
///     // ... implement fetch
/// }
/// ```
#[async_trait]
pub trait InflationProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// The source this provider serves.
    fn source(&self) -> InflationSource;

    /// Catalog of indicators known to work with this provider.
    fn metrics(&self) -> &'static [MetricDefinition];

    /// Fetch one indicator series.
    ///
    /// Returns observations sorted ascending by date with non-finite values
    /// removed. Transport failures and non-success statuses are errors; an
    /// unexpected payload shape yields an empty series.
    async fn fetch(&self, request: &SeriesRequest) -> Result<ProviderSeries, EconomicDataError>;
}
