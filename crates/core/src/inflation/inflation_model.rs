use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use wealthfolio_economic_data::{Granularity, ValueKind};

/// A `{date, value}` point of an inflation series.
///
/// Raw provider observations and rebased index points share this shape; the
/// stage that produced a series determines how `value` reads.
pub type InflationPoint = wealthfolio_economic_data::Observation;

/// Output resolution chosen by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resolution {
    #[default]
    Monthly,
    Daily,
}

impl Resolution {
    pub fn granularity(&self) -> Granularity {
        match self {
            Resolution::Monthly => Granularity::Month,
            Resolution::Daily => Granularity::Day,
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Resolution::Monthly),
            "daily" | "day" | "d" => Ok(Resolution::Daily),
            other => Err(format!("unknown resolution '{}'", other)),
        }
    }
}
