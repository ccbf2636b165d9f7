//! Inflation comparison service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use wealthfolio_economic_data::{MetricDefinition, ProviderRegistry, ProviderSeries, SeriesRequest};

use super::comparison_calculator::build_comparison_series;
use super::comparison_metrics::{
    build_excess_return_series, build_interest_series, build_summary_stats,
};
use super::comparison_model::ComparisonReport;
use super::comparison_traits::ComparisonServiceTrait;
use crate::constants::{ALL_ACCOUNTS_SELECTOR, PORTFOLIO_TOTAL_ACCOUNT_ID};
use crate::errors::{Error, Result};
use crate::inflation::{
    build_inflation_index, expand_inflation_index, normalize_inflation_series, reconcile_dual_rate,
    sort_inflation_points, Granularity, InflationPoint, Resolution, ValueKind,
};
use crate::portfolio::valuation::{
    build_daily_portfolio_series, build_monthly_portfolio_series, ValuationSnapshot,
    ValuationSourceTrait,
};
use crate::settings::{InflationSettings, RangeSpec};

/// Observations ready for the index builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSeries {
    pub points: Vec<InflationPoint>,
    pub granularity: Granularity,
    pub kind: ValueKind,
}

/// Flatten provider output into observations with their granularity and kind.
///
/// Dual-rate series are reconciled into monthly percent changes, or fall back
/// to the annual rates of the requested indicator; both are percent series
/// whatever `kind` says.
pub fn resolve_provider_series(series: &ProviderSeries, kind: ValueKind) -> ResolvedSeries {
    match series {
        ProviderSeries::Observations { points, granularity } => ResolvedSeries {
            points: sort_inflation_points(points),
            granularity: *granularity,
            kind,
        },
        ProviderSeries::DualRate(dual_rate) => {
            let (points, granularity) = reconcile_dual_rate(dual_rate);
            ResolvedSeries {
                points: sort_inflation_points(&points),
                granularity,
                kind: ValueKind::Percent,
            }
        }
    }
}

/// Service joining portfolio valuations with an inflation benchmark.
pub struct ComparisonService {
    registry: Arc<ProviderRegistry>,
    valuation_source: Arc<dyn ValuationSourceTrait>,
}

impl ComparisonService {
    /// Creates a new ComparisonService instance.
    pub fn new(
        registry: Arc<ProviderRegistry>,
        valuation_source: Arc<dyn ValuationSourceTrait>,
    ) -> Self {
        Self {
            registry,
            valuation_source,
        }
    }

    /// Run the comparison pipeline on already fetched data.
    ///
    /// Valuations become a dense daily series (downsampled to months for the
    /// monthly resolution). The inflation series is collapsed onto period
    /// keys, turned into an index, expanded to the resolution and aligned with
    /// the portfolio.
    pub fn analyze(
        valuations: &[ValuationSnapshot],
        series: &ProviderSeries,
        metric: &MetricDefinition,
        resolution: Resolution,
    ) -> ComparisonReport {
        let daily = build_daily_portfolio_series(valuations);
        let portfolio = match resolution {
            Resolution::Daily => daily,
            Resolution::Monthly => build_monthly_portfolio_series(&daily),
        };

        let resolved = resolve_provider_series(series, metric.kind);
        let normalized = normalize_inflation_series(&resolved.points, resolved.granularity);
        let index = build_inflation_index(&normalized, resolved.kind);
        let expanded = expand_inflation_index(&index, resolution);
        debug!(
            "Aligning {} portfolio points with {} inflation points",
            portfolio.len(),
            expanded.len()
        );

        let points = build_comparison_series(&portfolio, &expanded);

        ComparisonReport {
            metric: metric.clone(),
            resolution,
            excess_returns: build_excess_return_series(&points),
            interest: build_interest_series(&points),
            stats: build_summary_stats(&points),
            points,
        }
    }

    fn build_request(
        settings: &InflationSettings,
        metric: &MetricDefinition,
        proxy: &str,
        range: &RangeSpec,
    ) -> Result<SeriesRequest> {
        let country = settings.country_code();
        if country.is_empty() {
            return Err(Error::InvalidConfigValue("country must not be empty".to_string()));
        }

        Ok(SeriesRequest::new(country, metric.id.to_string())
            .with_frequency(settings.request_frequency(metric))
            .with_years(range.start_year, range.end_year)
            .with_proxy(proxy))
    }
}

#[async_trait]
impl ComparisonServiceTrait for ComparisonService {
    async fn compare(
        &self,
        settings: &InflationSettings,
        account_id: &str,
        today: NaiveDate,
    ) -> Result<ComparisonReport> {
        let proxy = settings
            .proxy()
            .ok_or_else(|| Error::MissingConfigKey("proxyBase".to_string()))?;
        let metric = settings
            .selected_metric(self.registry.metrics(settings.source))
            .ok_or_else(|| Error::InvalidConfigValue("no inflation metric selected".to_string()))?;
        let range = settings.range.resolve(today);
        let request = Self::build_request(settings, &metric, proxy, &range)?;

        let requested_account = if account_id == ALL_ACCOUNTS_SELECTOR {
            PORTFOLIO_TOTAL_ACCOUNT_ID
        } else {
            account_id
        };

        info!(
            "Comparing account {} against {} {} ({})",
            requested_account, settings.source, metric.id, settings.range
        );

        let (valuations, series) = tokio::try_join!(
            self.valuation_source.get_historical_valuations(
                requested_account,
                range.start_date,
                range.end_date,
            ),
            async {
                self.registry
                    .fetch(settings.source, &request)
                    .await
                    .map_err(Error::from)
            },
        )?;

        debug!(
            "Fetched {} valuations and {} inflation observations",
            valuations.len(),
            series.len()
        );

        Ok(Self::analyze(&valuations, &series, &metric, settings.resolution))
    }
}
