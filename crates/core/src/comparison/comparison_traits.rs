//! Comparison service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::comparison_model::ComparisonReport;
use crate::errors::Result;
use crate::settings::InflationSettings;

/// Trait defining the contract for inflation comparison operations.
#[async_trait]
pub trait ComparisonServiceTrait: Send + Sync {
    /// Compare an account's valuation history against inflation.
    ///
    /// Fetches valuations and the inflation series concurrently, then runs the
    /// pure comparison pipeline.
    ///
    /// # Arguments
    /// * `settings` - Source, metric, range and resolution to use
    /// * `account_id` - Account id, or `"all"` for the portfolio total
    /// * `today` - End of the comparison range
    ///
    /// # Returns
    /// A `ComparisonReport`; an empty report when the series do not overlap.
    async fn compare(
        &self,
        settings: &InflationSettings,
        account_id: &str,
        today: NaiveDate,
    ) -> Result<ComparisonReport>;
}
