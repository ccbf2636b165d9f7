//! Economic data provider abstractions and implementations.
//!
//! This module contains:
//! - The `InflationProvider` trait that all providers implement
//! - CORS proxy URL construction shared by every provider
//! - Concrete provider implementations (World Bank, IMF, DBnomics)
//!
//! Each provider converts its own payload shape into [`ProviderSeries`]
//! immediately, so nothing downstream branches on provider identity.
//!
//! [`ProviderSeries`]: crate::models::ProviderSeries

mod http;
mod proxy;
mod traits;

pub mod dbnomics;
pub mod imf;
pub mod world_bank;

pub use proxy::build_proxied_url;
pub use traits::InflationProvider;

pub(crate) use http::{build_client, fetch_json, json_number, sort_observations};
