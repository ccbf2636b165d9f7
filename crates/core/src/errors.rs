//! Core error types for the inflation comparison.
//!
//! The series algorithms themselves never fail: malformed dates pass through,
//! empty input yields empty output and every division is guarded. Errors only
//! come from configuration and from the two data sources the service joins.

use thiserror::Error;
use wealthfolio_economic_data::EconomicDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the inflation comparison.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Economic data operation failed: {0}")]
    EconomicData(#[from] EconomicDataError),

    #[error("Failed to load valuations: {0}")]
    ValuationSource(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ValuationSource(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_convert() {
        let err: Error = EconomicDataError::ProxyNotConfigured.into();
        assert!(matches!(err, Error::EconomicData(_)));
        assert_eq!(
            err.to_string(),
            "Economic data operation failed: CORS proxy not configured"
        );
    }

    #[test]
    fn test_malformed_json_is_a_valuation_error() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, Error::ValuationSource(_)));
    }
}
