//! Source trait for portfolio valuations.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ValuationSnapshot;
use crate::errors::Result;

/// Supplies historical valuation snapshots for an account.
#[async_trait]
pub trait ValuationSourceTrait: Send + Sync {
    /// Get historical valuations for an account within an optional date range.
    ///
    /// `account_id` is a concrete account or the portfolio total account.
    async fn get_historical_valuations(
        &self,
        account_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ValuationSnapshot>>;
}
