//! Error types for the economic data crate.

use thiserror::Error;

/// Errors that can occur while fetching economic data.
///
/// Only transport-level and configuration problems are errors. A payload whose
/// shape does not match what a provider normally returns is treated as an
/// empty series instead.
#[derive(Error, Debug)]
pub enum EconomicDataError {
    /// No CORS proxy was configured; every provider request goes through it.
    #[error("CORS proxy not configured")]
    ProxyNotConfigured,

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} request failed ({status})")]
    RequestFailed {
        /// The provider that rejected the request
        provider: String,
        /// HTTP status code returned
        status: u16,
    },

    /// The provider response could not be decoded.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// No provider is registered for the requested source.
    #[error("Unsupported inflation source: {0}")]
    UnsupportedSource(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
