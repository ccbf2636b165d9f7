use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthfolio_economic_data::ProviderRegistry;
use wealthfolio_inflation_core::comparison::ComparisonService;

use crate::config::Config;
use crate::valuation_file::JsonValuationSource;

pub fn init_tracing() {
    let log_format = std::env::var("WF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_service(config: &Config) -> ComparisonService {
    tracing::info!("Valuations file in use: {}", config.valuations_file.display());
    ComparisonService::new(
        Arc::new(ProviderRegistry::default()),
        Arc::new(JsonValuationSource::new(config.valuations_file.clone())),
    )
}
