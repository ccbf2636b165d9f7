//! World Bank indicators API provider.
//!
//! Annual series only. The endpoint returns a two-element array: paging
//! metadata followed by the data rows (or `null` when nothing matched).

use std::borrow::Cow;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::EconomicDataError;
use crate::models::{
    Granularity, InflationSource, MetricDefinition, Observation, ProviderSeries, SeriesRequest,
    ValueKind,
};
use crate::provider::{build_client, fetch_json, json_number, sort_observations, InflationProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "WORLD_BANK";

const PROVIDER_NAME: &str = "World Bank";

const BASE_URL: &str = "https://api.worldbank.org/v2/country";

/// Large enough to return every year in one page.
const PER_PAGE: u32 = 20_000;

pub const WORLD_BANK_METRICS: &[MetricDefinition] = &[
    MetricDefinition {
        id: Cow::Borrowed("FP.CPI.TOTL.ZG"),
        label: Cow::Borrowed("Inflation, consumer prices (annual %)"),
        kind: ValueKind::Percent,
        source: InflationSource::WorldBank,
        frequency: None,
        notes: None,
    },
    MetricDefinition {
        id: Cow::Borrowed("FP.CPI.TOTL"),
        label: Cow::Borrowed("Consumer price index (2010 = 100)"),
        kind: ValueKind::Index,
        source: InflationSource::WorldBank,
        frequency: None,
        notes: None,
    },
    MetricDefinition {
        id: Cow::Borrowed("NY.GDP.DEFL.KD.ZG"),
        label: Cow::Borrowed("Inflation, GDP deflator (annual %)"),
        kind: ValueKind::Percent,
        source: InflationSource::WorldBank,
        frequency: None,
        notes: None,
    },
    MetricDefinition {
        id: Cow::Borrowed("FP.WPI.TOTL"),
        label: Cow::Borrowed("Wholesale price index (2010 = 100)"),
        kind: ValueKind::Index,
        source: InflationSource::WorldBank,
        frequency: None,
        notes: None,
    },
];

/// A data row; only `date` and `value` are used.
#[derive(Debug, Deserialize)]
struct WorldBankDataPoint {
    date: Value,
    #[serde(default)]
    value: Value,
}

pub struct WorldBankProvider {
    client: Client,
}

impl Default for WorldBankProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBankProvider {
    pub fn new() -> Self {
        Self {
            client: build_client(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_url(request: &SeriesRequest) -> String {
        let country = InflationSource::WorldBank.normalize_country(&request.country);
        let mut url = format!(
            "{}/{}/indicator/{}?format=json&per_page={}",
            BASE_URL,
            country,
            request.indicator.trim(),
            PER_PAGE
        );
        if let (Some(start), Some(end)) = (request.start_year, request.end_year) {
            url.push_str(&format!("&date={}:{}", start, end));
        }
        url
    }

    /// Extract observations from a World Bank payload.
    fn parse_payload(payload: &Value) -> Vec<Observation> {
        let Some(rows) = payload
            .as_array()
            .and_then(|items| items.get(1))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        // Malformed rows are skipped one by one.
        let points = rows
            .iter()
            .filter_map(|row| WorldBankDataPoint::deserialize(row).ok())
            .filter_map(|row| {
                let value = json_number(&row.value)?;
                let date = match row.date {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Some(Observation::new(date, value))
            })
            .collect();

        sort_observations(points)
    }
}

#[async_trait]
impl InflationProvider for WorldBankProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn source(&self) -> InflationSource {
        InflationSource::WorldBank
    }

    fn metrics(&self) -> &'static [MetricDefinition] {
        WORLD_BANK_METRICS
    }

    async fn fetch(&self, request: &SeriesRequest) -> Result<ProviderSeries, EconomicDataError> {
        let url = Self::build_url(request);
        let payload = fetch_json(
            &self.client,
            PROVIDER_NAME,
            &url,
            request.proxy_base.as_deref(),
        )
        .await?;

        let points = Self::parse_payload(&payload);
        debug!(
            "World Bank returned {} observations for {}/{}",
            points.len(),
            request.country,
            request.indicator
        );

        Ok(ProviderSeries::Observations {
            points,
            granularity: Granularity::Year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url_with_range() {
        let request = SeriesRequest::new("US", "FP.CPI.TOTL.ZG").with_years(Some(2019), Some(2024));
        assert_eq!(
            WorldBankProvider::build_url(&request),
            "https://api.worldbank.org/v2/country/us/indicator/FP.CPI.TOTL.ZG?format=json&per_page=20000&date=2019:2024"
        );
    }

    #[test]
    fn test_build_url_without_full_range_omits_date() {
        let request = SeriesRequest::new("gb", "FP.CPI.TOTL").with_years(Some(2019), None);
        assert!(!WorldBankProvider::build_url(&request).contains("date="));
    }

    #[test]
    fn test_parse_payload_drops_nulls_and_sorts() {
        let payload = json!([
            {"page": 1, "pages": 1, "per_page": 20000, "total": 3},
            [
                {"date": "2022", "value": 8.0, "country": {"id": "US", "value": "United States"}},
                {"date": "2021", "value": null, "country": {"id": "US", "value": "United States"}},
                {"date": "2020", "value": 1.2, "country": {"id": "US", "value": "United States"}}
            ]
        ]);

        let points = WorldBankProvider::parse_payload(&payload);
        assert_eq!(
            points,
            vec![Observation::new("2020", 1.2), Observation::new("2022", 8.0)]
        );
    }

    #[test]
    fn test_parse_payload_skips_only_malformed_rows() {
        let payload = json!([
            {"page": 1, "pages": 1, "per_page": 20000, "total": 5},
            [
                {"date": "2020", "value": 1.2},
                {"date": "2021", "value": "3.4"},
                {"date": "2022", "value": 2.0},
                {"date": "2023", "value": "n/a"},
                "unexpected",
                null
            ]
        ]);

        let points = WorldBankProvider::parse_payload(&payload);
        assert_eq!(
            points,
            vec![
                Observation::new("2020", 1.2),
                Observation::new("2021", 3.4),
                Observation::new("2022", 2.0),
            ]
        );
    }

    #[test]
    fn test_parse_payload_with_missing_rows_is_empty() {
        let payload = json!([{"message": [{"id": "120", "value": "Invalid value"}]}]);
        assert!(WorldBankProvider::parse_payload(&payload).is_empty());

        let payload = json!([{"page": 0}, null]);
        assert!(WorldBankProvider::parse_payload(&payload).is_empty());
    }

    #[test]
    fn test_provider_identity() {
        let provider = WorldBankProvider::new();
        assert_eq!(provider.id(), "WORLD_BANK");
        assert_eq!(provider.source(), InflationSource::WorldBank);
        assert_eq!(provider.metrics().len(), 4);
    }
}
