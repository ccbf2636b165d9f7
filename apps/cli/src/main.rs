mod config;
mod main_lib;
mod valuation_file;

use config::Config;
use main_lib::{build_service, init_tracing};
use wealthfolio_inflation_core::comparison::ComparisonServiceTrait;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let service = build_service(&config);

    let today = chrono::Utc::now().date_naive();
    let report = service
        .compare(&config.settings, &config.account_id, today)
        .await?;

    if !report.has_data() {
        tracing::warn!("Portfolio and inflation series have no overlapping periods");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
