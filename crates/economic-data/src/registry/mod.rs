//! Provider registry module.
//!
//! Maps an [`InflationSource`](crate::models::InflationSource) to the provider
//! that serves it.

mod registry;

pub use registry::ProviderRegistry;
