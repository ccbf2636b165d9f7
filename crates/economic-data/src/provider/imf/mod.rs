//! IMF DataMapper provider.
//!
//! DataMapper only publishes annual values, shaped as
//! `values[indicator][country][year] = value`. Average (`PCPIPCH`) and
//! end-of-period (`PCPIEPCH`) inflation are always fetched together so the
//! inflation core can reconcile them into a monthly series.

use std::borrow::Cow;
use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::errors::EconomicDataError;
use crate::models::{
    DualRateIndicator, DualRateSeries, Frequency, Granularity, InflationSource, MetricDefinition,
    Observation, ProviderSeries, SeriesRequest, ValueKind,
};
use crate::provider::{build_client, fetch_json, json_number, sort_observations, InflationProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "IMF";

const BASE_URL: &str = "https://www.imf.org/external/datamapper/api/v1";

pub const IMF_AVERAGE_INDICATOR: &str = "PCPIPCH";
pub const IMF_END_OF_PERIOD_INDICATOR: &str = "PCPIEPCH";

const DUAL_RATE_NOTES: &str = "Interpolated monthly using average and end-of-period inflation.";

pub const IMF_METRICS: &[MetricDefinition] = &[
    MetricDefinition {
        id: Cow::Borrowed(IMF_AVERAGE_INDICATOR),
        label: Cow::Borrowed("Inflation rate, average consumer prices (annual %)"),
        kind: ValueKind::Percent,
        source: InflationSource::Imf,
        frequency: Some(Frequency::Monthly),
        notes: Some(Cow::Borrowed(DUAL_RATE_NOTES)),
    },
    MetricDefinition {
        id: Cow::Borrowed(IMF_END_OF_PERIOD_INDICATOR),
        label: Cow::Borrowed("Inflation rate, end of period consumer prices (annual %)"),
        kind: ValueKind::Percent,
        source: InflationSource::Imf,
        frequency: Some(Frequency::Monthly),
        notes: Some(Cow::Borrowed(DUAL_RATE_NOTES)),
    },
];

pub struct ImfProvider {
    client: Client,
}

impl Default for ImfProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ImfProvider {
    pub fn new() -> Self {
        Self {
            client: build_client(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn dual_rate_indicator(indicator: &str) -> Option<DualRateIndicator> {
        match indicator.trim() {
            IMF_AVERAGE_INDICATOR => Some(DualRateIndicator::Average),
            IMF_END_OF_PERIOD_INDICATOR => Some(DualRateIndicator::EndOfPeriod),
            _ => None,
        }
    }

    /// Comma-separated list of every year in range, or `None` when the range
    /// is open or inverted.
    fn build_periods_param(start_year: Option<i32>, end_year: Option<i32>) -> Option<String> {
        let (start, end) = (start_year?, end_year?);
        if end < start {
            return None;
        }
        let years: Vec<String> = (start..=end).map(|year| year.to_string()).collect();
        Some(years.join(","))
    }

    fn build_url(indicator: &str, country: &str, request: &SeriesRequest) -> String {
        let mut url = format!("{}/{}/{}", BASE_URL, indicator, country);
        if let Some(periods) = Self::build_periods_param(request.start_year, request.end_year) {
            url.push_str("?periods=");
            url.push_str(&periods);
        }
        url
    }

    /// Extract `year -> value` for one indicator/country pair.
    fn parse_values(payload: &Value, indicator: &str, country: &str) -> BTreeMap<i32, f64> {
        let Some(raw_values) = payload
            .get("values")
            .and_then(|values| values.get(indicator))
            .and_then(|by_country| by_country.get(country))
            .and_then(Value::as_object)
        else {
            return BTreeMap::new();
        };

        raw_values
            .iter()
            .filter_map(|(year, value)| {
                let year = year.trim().parse::<i32>().ok()?;
                Some((year, json_number(value)?))
            })
            .collect()
    }

    async fn fetch_indicator(
        &self,
        indicator: &str,
        country: &str,
        request: &SeriesRequest,
    ) -> Result<BTreeMap<i32, f64>, EconomicDataError> {
        let url = Self::build_url(indicator, country, request);
        let payload = fetch_json(
            &self.client,
            PROVIDER_ID,
            &url,
            request.proxy_base.as_deref(),
        )
        .await?;
        Ok(Self::parse_values(&payload, indicator, country))
    }
}

#[async_trait]
impl InflationProvider for ImfProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn source(&self) -> InflationSource {
        InflationSource::Imf
    }

    fn metrics(&self) -> &'static [MetricDefinition] {
        IMF_METRICS
    }

    async fn fetch(&self, request: &SeriesRequest) -> Result<ProviderSeries, EconomicDataError> {
        let country = InflationSource::Imf.normalize_country(&request.country);
        let indicator = request.indicator.trim();

        if let Some(requested) = Self::dual_rate_indicator(indicator) {
            let (average, end_of_period) = futures::try_join!(
                self.fetch_indicator(IMF_AVERAGE_INDICATOR, &country, request),
                self.fetch_indicator(IMF_END_OF_PERIOD_INDICATOR, &country, request),
            )?;
            debug!(
                "IMF returned {} average and {} end-of-period rates for {}",
                average.len(),
                end_of_period.len(),
                country
            );
            return Ok(ProviderSeries::DualRate(DualRateSeries {
                average,
                end_of_period,
                requested: Some(requested),
            }));
        }

        let values = self.fetch_indicator(indicator, &country, request).await?;
        let points = values
            .into_iter()
            .map(|(year, value)| Observation::new(year.to_string(), value))
            .collect();

        Ok(ProviderSeries::Observations {
            points: sort_observations(points),
            granularity: Granularity::Year,
        })
    }
}
