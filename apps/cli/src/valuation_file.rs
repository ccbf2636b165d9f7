//! Valuation source backed by a JSON export.
//!
//! The file holds either a plain array of snapshots, served for every account,
//! or an object mapping account ids to snapshot arrays.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use wealthfolio_inflation_core::errors::{Error, Result};
use wealthfolio_inflation_core::portfolio::valuation::{ValuationSnapshot, ValuationSourceTrait};
use wealthfolio_inflation_core::utils::time_utils::parse_loose_date;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValuationFile {
    Single(Vec<ValuationSnapshot>),
    ByAccount(HashMap<String, Vec<ValuationSnapshot>>),
}

pub struct JsonValuationSource {
    path: PathBuf,
}

impl JsonValuationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn in_range(
        snapshot: &ValuationSnapshot,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> bool {
        let day: String = snapshot.valuation_date.chars().take(10).collect();
        // Unparseable dates are kept and handled downstream.
        let Some(date) = parse_loose_date(&day) else {
            return true;
        };
        start_date.map_or(true, |start| date >= start) && end_date.map_or(true, |end| date <= end)
    }
}

#[async_trait]
impl ValuationSourceTrait for JsonValuationSource {
    async fn get_historical_valuations(
        &self,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ValuationSnapshot>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::ValuationSource(format!("{}: {}", self.path.display(), e))
        })?;

        let snapshots = match serde_json::from_str::<ValuationFile>(&raw)? {
            ValuationFile::Single(snapshots) => snapshots,
            ValuationFile::ByAccount(mut by_account) => {
                by_account.remove(account_id).ok_or_else(|| {
                    Error::ValuationSource(format!("no valuations for account '{}'", account_id))
                })?
            }
        };

        let total = snapshots.len();
        let filtered: Vec<ValuationSnapshot> = snapshots
            .into_iter()
            .filter(|snapshot| Self::in_range(snapshot, start_date, end_date))
            .collect();
        tracing::debug!(
            "Loaded {} of {} valuations for account {}",
            filtered.len(),
            total,
            account_id
        );

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_reads_plain_array_and_filters_range() {
        let file = write_file(
            r#"[
                {"valuationDate": "2022-12-31", "totalValue": 900, "netContribution": 900},
                {"valuationDate": "2023-01-01", "totalValue": 1000, "netContribution": 1000},
                {"valuationDate": "2023-02-01T10:00:00Z", "totalValue": "1050.5"}
            ]"#,
        );
        let source = JsonValuationSource::new(file.path());

        let valuations = source
            .get_historical_valuations("TOTAL", Some(date(2023, 1, 1)), None)
            .await
            .unwrap();

        assert_eq!(valuations.len(), 2);
        assert_eq!(valuations[0].total_value, dec!(1000));
        assert_eq!(valuations[1].total_value, dec!(1050.5));
        assert_eq!(valuations[1].net_contribution, None);
    }

    #[tokio::test]
    async fn test_reads_per_account_map() {
        let file = write_file(
            r#"{
                "TOTAL": [{"valuationDate": "2023-01-01", "totalValue": 10}],
                "acc-1": [{"valuationDate": "2023-01-01", "totalValue": 3}]
            }"#,
        );
        let source = JsonValuationSource::new(file.path());

        let valuations = source
            .get_historical_valuations("acc-1", None, None)
            .await
            .unwrap();
        assert_eq!(valuations[0].total_value, dec!(3));

        let missing = source.get_historical_valuations("acc-2", None, None).await;
        assert!(matches!(missing, Err(Error::ValuationSource(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_valuation_error() {
        let source = JsonValuationSource::new("/nonexistent/valuations.json");
        let result = source.get_historical_valuations("TOTAL", None, None).await;
        assert!(matches!(result, Err(Error::ValuationSource(_))));
    }
}
