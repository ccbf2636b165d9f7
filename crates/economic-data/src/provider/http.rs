//! HTTP and payload helpers shared by the providers.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::proxy::build_proxied_url;
use crate::errors::EconomicDataError;
use crate::models::Observation;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET `target_url` through the proxy and decode the body as JSON.
pub(crate) async fn fetch_json(
    client: &Client,
    provider: &str,
    target_url: &str,
    proxy_base: Option<&str>,
) -> Result<Value, EconomicDataError> {
    let url = build_proxied_url(target_url, proxy_base)?;
    debug!("{} request: {}", provider, target_url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(EconomicDataError::RequestFailed {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| EconomicDataError::ProviderError {
            provider: provider.to_string(),
            message: e.to_string(),
        })
}

/// Numeric coercion for payload values: numbers and numeric strings are
/// accepted, anything else (null, "NA", objects) is rejected.
pub(crate) fn json_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Drop non-finite values and sort ascending by date string.
pub(crate) fn sort_observations(mut points: Vec<Observation>) -> Vec<Observation> {
    points.retain(|point| point.value.is_finite());
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_number_coercion() {
        assert_eq!(json_number(&json!(2.5)), Some(2.5));
        assert_eq!(json_number(&json!("3.25")), Some(3.25));
        assert_eq!(json_number(&json!("NA")), None);
        assert_eq!(json_number(&json!(null)), None);
        assert_eq!(json_number(&json!({"value": 1})), None);
    }

    #[test]
    fn test_sort_observations_drops_non_finite() {
        let points = vec![
            Observation::new("2021", 2.0),
            Observation::new("2019", f64::NAN),
            Observation::new("2020", 1.0),
        ];
        let sorted = sort_observations(points);
        assert_eq!(
            sorted,
            vec![Observation::new("2020", 1.0), Observation::new("2021", 2.0)]
        );
    }
}
