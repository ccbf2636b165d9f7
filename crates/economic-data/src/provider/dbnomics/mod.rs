//! DBnomics provider (mirror of IMF International Financial Statistics).
//!
//! Series are addressed as `{frequency}.{country}.{indicator}`. The response
//! carries parallel `period`/`value` arrays on the first series document.

use std::borrow::Cow;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::errors::EconomicDataError;
use crate::models::{
    Frequency, InflationSource, MetricDefinition, Observation, ProviderSeries, SeriesRequest,
    ValueKind,
};
use crate::provider::{build_client, fetch_json, json_number, sort_observations, InflationProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "DBNOMICS";

const PROVIDER_NAME: &str = "DBnomics";

const BASE_URL: &str = "https://api.db.nomics.world/v22/series/IMF/IFS";

pub const DBNOMICS_METRICS: &[MetricDefinition] = &[
    MetricDefinition {
        id: Cow::Borrowed("PCPI_IX"),
        label: Cow::Borrowed("Consumer price index (index)"),
        kind: ValueKind::Index,
        source: InflationSource::Dbnomics,
        frequency: None,
        notes: None,
    },
    MetricDefinition {
        id: Cow::Borrowed("PCPI_PC_CP_A_PT"),
        label: Cow::Borrowed("Consumer price inflation (annual %)"),
        kind: ValueKind::Percent,
        source: InflationSource::Dbnomics,
        frequency: Some(Frequency::Annual),
        notes: None,
    },
    MetricDefinition {
        id: Cow::Borrowed("PPPI_IX"),
        label: Cow::Borrowed("Producer price index (index)"),
        kind: ValueKind::Index,
        source: InflationSource::Dbnomics,
        frequency: None,
        notes: None,
    },
];

pub struct DbnomicsProvider {
    client: Client,
}

impl Default for DbnomicsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DbnomicsProvider {
    pub fn new() -> Self {
        Self {
            client: build_client(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn build_url(request: &SeriesRequest) -> String {
        let country = InflationSource::Dbnomics.normalize_country(&request.country);
        format!(
            "{}/{}.{}.{}?observations=1",
            BASE_URL,
            request.frequency.code(),
            country,
            request.indicator.trim()
        )
    }

    /// Zip the period and value arrays, applying the year window.
    ///
    /// `period_start_day` is preferred over `period` when present.
    fn parse_payload(
        payload: &Value,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Vec<Observation> {
        let Some(doc) = payload
            .get("series")
            .and_then(|series| series.get("docs"))
            .and_then(|docs| docs.get(0))
        else {
            return Vec::new();
        };

        let periods = doc
            .get("period_start_day")
            .and_then(Value::as_array)
            .or_else(|| doc.get("period").and_then(Value::as_array));
        let values = doc.get("value").and_then(Value::as_array);
        let (Some(periods), Some(values)) = (periods, values) else {
            return Vec::new();
        };

        let points = periods
            .iter()
            .zip(values.iter())
            .filter_map(|(period, value)| {
                let period = match period {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let year = period.get(..4).and_then(|y| y.parse::<i32>().ok());
                if let Some(year) = year {
                    if start_year.is_some_and(|start| year < start)
                        || end_year.is_some_and(|end| year > end)
                    {
                        return None;
                    }
                }
                Some(Observation::new(period, json_number(value)?))
            })
            .collect();

        sort_observations(points)
    }
}

#[async_trait]
impl InflationProvider for DbnomicsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn source(&self) -> InflationSource {
        InflationSource::Dbnomics
    }

    fn metrics(&self) -> &'static [MetricDefinition] {
        DBNOMICS_METRICS
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

        let points = Self::parse_payload(&payload, request.start_year, request.end_year);
        debug!(
            "DBnomics returned {} observations for {}",
            points.len(),
            url
        );

        Ok(ProviderSeries::Observations {
            points,
            granularity: request.frequency.granularity(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        let request = SeriesRequest::new("fr", "PCPI_IX").with_frequency(Frequency::Monthly);
        assert_eq!(
            DbnomicsProvider::build_url(&request),
            "https://api.db.nomics.world/v22/series/IMF/IFS/M.FR.PCPI_IX?observations=1"
        );
    }

    #[test]
    fn test_parse_payload_prefers_period_start_day() {
        let payload = json!({
            "series": {
                "docs": [{
                    "period": ["2020-01", "2020-02", "2020-03"],
                    "period_start_day": ["2020-01-01", "2020-02-01", "2020-03-01"],
                    "value": [105.1, "NA", 105.9]
                }]
            }
        });

        let points = DbnomicsProvider::parse_payload(&payload, None, None);
        assert_eq!(
            points,
            vec![
                Observation::new("2020-01-01", 105.1),
                Observation::new("2020-03-01", 105.9),
            ]
        );
    }

    #[test]
    fn test_parse_payload_applies_year_window() {
        let payload = json!({
            "series": {
                "docs": [{
                    "period": ["2018", "2019", "2020", "2021"],
                    "value": [1.0, 2.0, 3.0, 4.0]
                }]
            }
        });

        let points = DbnomicsProvider::parse_payload(&payload, Some(2019), Some(2020));
        assert_eq!(
            points,
            vec![Observation::new("2019", 2.0), Observation::new("2020", 3.0)]
        );
    }

    #[test]
    fn test_parse_payload_uses_shorter_array() {
        let payload = json!({
            "series": {"docs": [{"period": ["2019", "2020"], "value": [2.0]}]}
        });
        assert_eq!(DbnomicsProvider::parse_payload(&payload, None, None).len(), 1);
    }

    #[test]
    fn test_parse_payload_without_docs_is_empty() {
        assert!(DbnomicsProvider::parse_payload(&json!({"series": {"docs": []}}), None, None).is_empty());
        assert!(DbnomicsProvider::parse_payload(&json!({}), None, None).is_empty());
    }
}
