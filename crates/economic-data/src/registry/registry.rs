//! Provider registry for routing inflation requests.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::EconomicDataError;
use crate::models::{InflationSource, MetricDefinition, ProviderSeries, SeriesRequest};
use crate::provider::dbnomics::DbnomicsProvider;
use crate::provider::imf::ImfProvider;
use crate::provider::world_bank::WorldBankProvider;
use crate::provider::InflationProvider;

/// Provider registry for routing inflation requests by source.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn InflationProvider>>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(WorldBankProvider::new()),
            Arc::new(ImfProvider::new()),
            Arc::new(DbnomicsProvider::new()),
        ])
    }
}

impl ProviderRegistry {
    /// Create a registry from an explicit provider list.
    ///
    /// When two providers serve the same source the first one wins.
    pub fn new(providers: Vec<Arc<dyn InflationProvider>>) -> Self {
        Self { providers }
    }

    /// Look up the provider for `source`.
    pub fn provider(
        &self,
        source: InflationSource,
    ) -> Result<Arc<dyn InflationProvider>, EconomicDataError> {
        self.providers
            .iter()
            .find(|provider| provider.source() == source)
            .cloned()
            .ok_or_else(|| EconomicDataError::UnsupportedSource(source.to_string()))
    }

    /// Indicator catalog for `source`, empty when no provider is registered.
    pub fn metrics(&self, source: InflationSource) -> &'static [MetricDefinition] {
        self.provider(source)
            .map(|provider| provider.metrics())
            .unwrap_or_default()
    }

    /// Fetch a series from the provider serving `source`.
    pub async fn fetch(
        &self,
        source: InflationSource,
        request: &SeriesRequest,
    ) -> Result<ProviderSeries, EconomicDataError> {
        let provider = self.provider(source)?;
        info!(
            "Fetching inflation series '{}' for '{}' from provider '{}'",
            request.indicator,
            request.country,
            provider.id()
        );

        match provider.fetch(request).await {
            Ok(series) => {
                if series.is_empty() {
                    warn!(
                        "Provider '{}' returned no data for '{}'",
                        provider.id(),
                        request.indicator
                    );
                }
                Ok(series)
            }
            Err(e) => {
                warn!("Provider '{}' failed: {}", provider.id(), e);
                Err(e)
            }
        }
    }
}
