//! Inflation comparison settings.
//!
//! Settings are owned by the caller (UI, CLI environment) and passed into the
//! comparison service at call time. Nothing here is persisted.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use wealthfolio_economic_data::{Frequency, InflationSource, MetricDefinition, ValueKind};

use crate::inflation::Resolution;

/// Metric id selecting the user-entered custom indicator.
pub const CUSTOM_METRIC_ID: &str = "custom";

/// Default World Bank indicator: consumer price inflation, annual %.
pub const DEFAULT_METRIC_ID: &str = "FP.CPI.TOTL.ZG";

pub const DEFAULT_COUNTRY: &str = "US";

/// Lookback window for the comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOption {
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "3Y")]
    ThreeYears,
    #[default]
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "10Y")]
    TenYears,
    #[serde(rename = "ALL")]
    All,
}

impl RangeOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOption::OneYear => "1Y",
            RangeOption::ThreeYears => "3Y",
            RangeOption::FiveYears => "5Y",
            RangeOption::TenYears => "10Y",
            RangeOption::All => "ALL",
        }
    }

    /// Number of years looked back, `None` for the full history.
    pub fn years(&self) -> Option<u32> {
        match self {
            RangeOption::OneYear => Some(1),
            RangeOption::ThreeYears => Some(3),
            RangeOption::FiveYears => Some(5),
            RangeOption::TenYears => Some(10),
            RangeOption::All => None,
        }
    }

    /// Resolve the window ending on `today`.
    ///
    /// The start keeps today's month and day; Feb 29 falls back to Feb 28 in
    /// non-leap start years.
    pub fn resolve(&self, today: NaiveDate) -> RangeSpec {
        let start = self
            .years()
            .and_then(|years| today.checked_sub_months(Months::new(years * 12)));

        match start {
            Some(start) => RangeSpec {
                start_date: Some(start),
                end_date: Some(today),
                start_year: Some(start.year()),
                end_year: Some(today.year()),
            },
            None => RangeSpec::default(),
        }
    }
}

impl fmt::Display for RangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1Y" => Ok(RangeOption::OneYear),
            "3Y" => Ok(RangeOption::ThreeYears),
            "5Y" => Ok(RangeOption::FiveYears),
            "10Y" => Ok(RangeOption::TenYears),
            "ALL" => Ok(RangeOption::All),
            other => Err(format!("unknown range '{}'", other)),
        }
    }
}

/// Concrete date and year bounds of a range. All `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeSpec {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// User choices driving one inflation comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InflationSettings {
    /// CORS proxy template; `{urlEncoded}` / `{url}` placeholders allowed.
    pub proxy_base: String,
    pub source: InflationSource,
    pub country: String,
    /// Catalog metric id, or [`CUSTOM_METRIC_ID`].
    pub metric_id: String,
    pub custom_metric_id: Option<String>,
    pub custom_metric_type: ValueKind,
    /// Frequency requested from IMF-backed sources.
    pub imf_frequency: Frequency,
    pub range: RangeOption,
    pub resolution: Resolution,
}

impl Default for InflationSettings {
    fn default() -> Self {
        Self {
            proxy_base: String::new(),
            source: InflationSource::WorldBank,
            country: DEFAULT_COUNTRY.to_string(),
            metric_id: DEFAULT_METRIC_ID.to_string(),
            custom_metric_id: None,
            custom_metric_type: ValueKind::Percent,
            imf_frequency: Frequency::Monthly,
            range: RangeOption::FiveYears,
            resolution: Resolution::Monthly,
        }
    }
}

impl InflationSettings {
    /// Resolve the metric to fetch against `catalog`.
    ///
    /// A custom metric needs a non-blank id. An unknown catalog id falls back
    /// to the first catalog entry. `None` when nothing can be selected.
    pub fn selected_metric(&self, catalog: &[MetricDefinition]) -> Option<MetricDefinition> {
        if self.metric_id == CUSTOM_METRIC_ID {
            let id = self.custom_metric_id.as_deref()?.trim();
            if id.is_empty() {
                return None;
            }
            let mut metric = MetricDefinition::custom(id, self.custom_metric_type, self.source);
            metric.frequency = Some(match self.source {
                InflationSource::WorldBank => Frequency::Annual,
                InflationSource::Imf | InflationSource::Dbnomics => self.imf_frequency,
            });
            return Some(metric);
        }

        catalog
            .iter()
            .find(|metric| metric.id == self.metric_id.trim())
            .or_else(|| catalog.first())
            .cloned()
    }

    /// Frequency to request for `metric`.
    ///
    /// World Bank series are annual. Other sources use the metric's own
    /// frequency, then the configured IMF frequency.
    pub fn request_frequency(&self, metric: &MetricDefinition) -> Frequency {
        match self.source {
            InflationSource::WorldBank => Frequency::Annual,
            InflationSource::Imf | InflationSource::Dbnomics => {
                metric.frequency.unwrap_or(self.imf_frequency)
            }
        }
    }

    pub fn proxy(&self) -> Option<&str> {
        let trimmed = self.proxy_base.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn country_code(&self) -> String {
        self.source.normalize_country(&self.country)
    }
}
