//! Wealthfolio Economic Data Crate
//!
//! This crate fetches inflation benchmarks from public economic-data
//! providers and normalizes every payload into a common observation shape
//! before it reaches the inflation core.
//!
//! # Overview
//!
//! Supported providers:
//! - World Bank indicators API (annual CPI, GDP deflator, WPI)
//! - IMF DataMapper (average and end-of-period annual inflation)
//! - DBnomics mirror of IMF International Financial Statistics
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  SeriesRequest   | --> | ProviderRegistry |  (source -> provider)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +-------------------+
//!                          | InflationProvider |  (World Bank, IMF, DBnomics)
//!                          +-------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ProviderSeries  |  (observations or dual-rate maps)
//!                          +------------------+
//! ```
//!
//! Requests are routed through a user-configured CORS proxy, see
//! [`build_proxied_url`].

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::EconomicDataError;

pub use models::{
    DualRateIndicator, DualRateSeries, Frequency, Granularity, InflationSource, MetricDefinition,
    Observation, ProviderSeries, SeriesRequest, ValueKind,
};

pub use provider::dbnomics::{DbnomicsProvider, DBNOMICS_METRICS};
pub use provider::imf::{ImfProvider, IMF_METRICS};
pub use provider::world_bank::{WorldBankProvider, WORLD_BANK_METRICS};
pub use provider::{build_proxied_url, InflationProvider};

pub use registry::ProviderRegistry;
