use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single economic observation as returned by a provider.
///
/// `date` is an ISO year (`YYYY`), month (`YYYY-MM`) or day (`YYYY-MM-DD`).
/// Malformed dates are kept verbatim and treated as opaque period keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: f64,
}

impl Observation {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// How the values of a series must be interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// Index levels (e.g. CPI 2010 = 100).
    Index,
    /// Percent change over the previous period.
    #[default]
    Percent,
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "index" => Ok(ValueKind::Index),
            "percent" | "percentchange" | "pct" => Ok(ValueKind::Percent),
            other => Err(format!("unknown value kind '{}'", other)),
        }
    }
}

/// Period bucket used to join series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    Year,
    Month,
    Day,
}

/// Sampling frequency requested from a provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "A")]
    Annual,
    #[default]
    #[serde(rename = "M")]
    Monthly,
}

impl Frequency {
    /// SDMX frequency code used in IMF/DBnomics series keys.
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Annual => "A",
            Frequency::Monthly => "M",
        }
    }

    /// Granularity of the observations a series at this frequency carries.
    pub fn granularity(&self) -> Granularity {
        match self {
            Frequency::Annual => Granularity::Year,
            Frequency::Monthly => Granularity::Month,
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "ANNUAL" => Ok(Frequency::Annual),
            "M" | "MONTHLY" => Ok(Frequency::Monthly),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// Economic data provider backing an inflation series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InflationSource {
    #[default]
    WorldBank,
    Imf,
    Dbnomics,
}

impl InflationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InflationSource::WorldBank => "worldBank",
            InflationSource::Imf => "imf",
            InflationSource::Dbnomics => "dbnomics",
        }
    }

    /// Country codes are lower-case for the World Bank and upper-case elsewhere.
    pub fn normalize_country(&self, country: &str) -> String {
        match self {
            InflationSource::WorldBank => country.trim().to_lowercase(),
            InflationSource::Imf | InflationSource::Dbnomics => country.trim().to_uppercase(),
        }
    }
}

impl fmt::Display for InflationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InflationSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "worldbank" | "world_bank" | "wb" => Ok(InflationSource::WorldBank),
            "imf" => Ok(InflationSource::Imf),
            "dbnomics" => Ok(InflationSource::Dbnomics),
            other => Err(format!("unknown inflation source '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trips_through_str() {
        for source in [
            InflationSource::WorldBank,
            InflationSource::Imf,
            InflationSource::Dbnomics,
        ] {
            assert_eq!(source.as_str().parse::<InflationSource>(), Ok(source));
        }
        assert!("fred".parse::<InflationSource>().is_err());
    }

    #[test]
    fn test_country_normalization() {
        assert_eq!(InflationSource::WorldBank.normalize_country(" US "), "us");
        assert_eq!(InflationSource::Imf.normalize_country("de"), "DE");
        assert_eq!(InflationSource::Dbnomics.normalize_country("fr"), "FR");
    }

    #[test]
    fn test_value_kind_serde_names() {
        assert_eq!(serde_json::to_string(&ValueKind::Index).unwrap(), "\"index\"");
        assert_eq!(serde_json::to_string(&ValueKind::Percent).unwrap(), "\"percent\"");
        assert_eq!("percentChange".parse::<ValueKind>(), Ok(ValueKind::Percent));
    }

    #[test]
    fn test_frequency_codes() {
        assert_eq!(Frequency::Annual.code(), "A");
        assert_eq!(Frequency::Monthly.code(), "M");
        assert_eq!(Frequency::Monthly.granularity(), Granularity::Month);
        assert_eq!(serde_json::to_string(&Frequency::Annual).unwrap(), "\"A\"");
    }
}
