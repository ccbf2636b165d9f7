//! Environment-based configuration for the comparison CLI.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use wealthfolio_inflation_core::constants::ALL_ACCOUNTS_SELECTOR;
use wealthfolio_inflation_core::settings::InflationSettings;

pub const ENV_PROXY: &str = "WF_INFLATION_PROXY";
pub const ENV_SOURCE: &str = "WF_INFLATION_SOURCE";
pub const ENV_COUNTRY: &str = "WF_INFLATION_COUNTRY";
pub const ENV_METRIC: &str = "WF_INFLATION_METRIC";
pub const ENV_CUSTOM_METRIC: &str = "WF_INFLATION_CUSTOM_METRIC";
pub const ENV_CUSTOM_METRIC_TYPE: &str = "WF_INFLATION_CUSTOM_METRIC_TYPE";
pub const ENV_IMF_FREQUENCY: &str = "WF_INFLATION_IMF_FREQUENCY";
pub const ENV_RANGE: &str = "WF_INFLATION_RANGE";
pub const ENV_RESOLUTION: &str = "WF_INFLATION_RESOLUTION";
pub const ENV_ACCOUNT: &str = "WF_INFLATION_ACCOUNT";
pub const ENV_VALUATIONS_FILE: &str = "WF_VALUATIONS_FILE";

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: InflationSettings,
    pub account_id: String,
    pub valuations_file: PathBuf,
}

impl Config {
    /// Load configuration from the process environment and an optional `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset keys keep their defaults;
    /// set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = InflationSettings::default();

        let valuations_file = value(ENV_VALUATIONS_FILE)
            .map(PathBuf::from)
            .with_context(|| format!("{} must point to a valuations JSON file", ENV_VALUATIONS_FILE))?;

        let mut settings = InflationSettings {
            proxy_base: value(ENV_PROXY).unwrap_or_default(),
            source: parse(ENV_SOURCE, value(ENV_SOURCE))?.unwrap_or(defaults.source),
            country: value(ENV_COUNTRY).unwrap_or(defaults.country),
            metric_id: value(ENV_METRIC).unwrap_or(defaults.metric_id),
            custom_metric_id: value(ENV_CUSTOM_METRIC),
            custom_metric_type: parse(ENV_CUSTOM_METRIC_TYPE, value(ENV_CUSTOM_METRIC_TYPE))?
                .unwrap_or(defaults.custom_metric_type),
            imf_frequency: parse(ENV_IMF_FREQUENCY, value(ENV_IMF_FREQUENCY))?
                .unwrap_or(defaults.imf_frequency),
            range: parse(ENV_RANGE, value(ENV_RANGE))?.unwrap_or(defaults.range),
            resolution: parse(ENV_RESOLUTION, value(ENV_RESOLUTION))?
                .unwrap_or(defaults.resolution),
        };
        settings.metric_id = settings.metric_id.trim().to_string();

        Ok(Self {
            settings,
            account_id: value(ENV_ACCOUNT).unwrap_or_else(|| ALL_ACCOUNTS_SELECTOR.to_string()),
            valuations_file,
        })
    }
}

fn parse<T>(key: &str, raw: Option<String>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    raw.map(|raw| raw.parse::<T>().map_err(|e| anyhow!("{}: {}", key, e)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wealthfolio_economic_data::{Frequency, InflationSource, ValueKind};
    use wealthfolio_inflation_core::inflation::Resolution;
    use wealthfolio_inflation_core::settings::RangeOption;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[(ENV_VALUATIONS_FILE, "valuations.json")]).unwrap();
        assert_eq!(config.account_id, "all");
        assert_eq!(config.valuations_file, PathBuf::from("valuations.json"));
        assert_eq!(config.settings, InflationSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_VALUATIONS_FILE, "v.json"),
            (ENV_PROXY, "https://proxy.example/{url}"),
            (ENV_SOURCE, "imf"),
            (ENV_COUNTRY, "fr"),
            (ENV_METRIC, " PCPIEPCH "),
            (ENV_IMF_FREQUENCY, "A"),
            (ENV_RANGE, "10Y"),
            (ENV_RESOLUTION, "daily"),
            (ENV_CUSTOM_METRIC_TYPE, "index"),
            (ENV_ACCOUNT, "acc-1"),
        ])
        .unwrap();

        let settings = &config.settings;
        assert_eq!(settings.source, InflationSource::Imf);
        assert_eq!(settings.country, "fr");
        assert_eq!(settings.metric_id, "PCPIEPCH");
        assert_eq!(settings.imf_frequency, Frequency::Annual);
        assert_eq!(settings.range, RangeOption::TenYears);
        assert_eq!(settings.resolution, Resolution::Daily);
        assert_eq!(settings.custom_metric_type, ValueKind::Index);
        assert_eq!(settings.proxy(), Some("https://proxy.example/{url}"));
        assert_eq!(config.account_id, "acc-1");
    }

    #[test]
    fn test_invalid_value_names_the_key() {
        let err = config_from(&[(ENV_VALUATIONS_FILE, "v.json"), (ENV_RANGE, "2W")]).unwrap_err();
        assert!(err.to_string().contains(ENV_RANGE));
    }

    #[test]
    fn test_valuations_file_is_required() {
        let err = config_from(&[(ENV_VALUATIONS_FILE, "  ")]).unwrap_err();
        assert!(err.to_string().contains(ENV_VALUATIONS_FILE));
    }
}
