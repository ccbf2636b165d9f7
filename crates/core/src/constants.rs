/// Total account ID
pub const PORTFOLIO_TOTAL_ACCOUNT_ID: &str = "TOTAL";

/// Account selector meaning "every account"
pub const ALL_ACCOUNTS_SELECTOR: &str = "all";

/// Reference level every rebased index starts from
pub const INDEX_BASE: f64 = 100.0;

/// Sub-periods per year for monthly expansion and dual-rate reconciliation
pub const MONTHS_PER_YEAR: u32 = 12;
