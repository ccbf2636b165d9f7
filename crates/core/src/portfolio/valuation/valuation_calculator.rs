use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::valuation_model::{SeriesPoint, ValuationSnapshot};
use crate::inflation::{sort_chronologically, to_period_key, Granularity};
use crate::utils::time_utils::{format_day_key, get_days_between, parse_iso_date};

/// Builds a gap-free daily series from sparse valuation snapshots.
///
/// Snapshots are bucketed by day (the last one seen for a day wins), then
/// every calendar day from the first to the last bucket is emitted, carrying
/// the most recent `total_value`/`net_contribution` forward over days without
/// a snapshot. Nothing is emitted before the first snapshot.
///
/// If the first or last day key is not a valid ISO date the buckets are
/// returned in key order without filling.
pub fn build_daily_portfolio_series(valuations: &[ValuationSnapshot]) -> Vec<SeriesPoint> {
    if valuations.is_empty() {
        return Vec::new();
    }

    let mut daily_values: HashMap<String, SeriesPoint> = HashMap::with_capacity(valuations.len());
    for valuation in valuations {
        let day_key = to_period_key(&valuation.valuation_date, Granularity::Day);
        daily_values.insert(
            day_key.clone(),
            SeriesPoint {
                date: day_key,
                total_value: valuation.total_value,
                net_contribution: valuation.net_contribution.unwrap_or(Decimal::ZERO),
            },
        );
    }

    let mut sorted_keys: Vec<String> = daily_values.keys().cloned().collect();
    sort_chronologically(&mut sorted_keys, |key| key.as_str());

    let (Some(first_key), Some(last_key)) = (sorted_keys.first(), sorted_keys.last()) else {
        return Vec::new();
    };

    let (Some(start_date), Some(end_date)) = (parse_iso_date(first_key), parse_iso_date(last_key))
    else {
        debug!("Valuation dates are not ISO days, skipping forward fill");
        return sorted_keys
            .iter()
            .filter_map(|key| daily_values.get(key).cloned())
            .collect();
    };

    let mut series = Vec::new();
    let mut last: Option<(Decimal, Decimal)> = None;

    for day in get_days_between(start_date, end_date) {
        let key = format_day_key(day);
        if let Some(point) = daily_values.get(&key) {
            last = Some((point.total_value, point.net_contribution));
        }
        if let Some((total_value, net_contribution)) = last {
            series.push(SeriesPoint {
                date: key,
                total_value,
                net_contribution,
            });
        }
    }

    series
}

/// Downsamples a daily series to one point per month.
///
/// Each month keeps the last point encountered for it in input order (the
/// month's closing value), re-dated to the `YYYY-MM` key.
pub fn build_monthly_portfolio_series(daily_series: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut by_month: HashMap<String, SeriesPoint> = HashMap::new();
    for point in daily_series {
        let month_key = to_period_key(&point.date, Granularity::Month);
        by_month.insert(
            month_key.clone(),
            SeriesPoint {
                date: month_key,
                total_value: point.total_value,
                net_contribution: point.net_contribution,
            },
        );
    }

    let mut monthly: Vec<SeriesPoint> = by_month.into_values().collect();
    sort_chronologically(&mut monthly, |point| point.date.as_str());
    monthly
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(date: &str, total: Decimal, contribution: Decimal) -> ValuationSnapshot {
        ValuationSnapshot::new(date, total, Some(contribution))
    }

    #[test]
    fn test_daily_forward_fills_gaps() {
        let series = build_daily_portfolio_series(&[
            snapshot("2023-01-01", dec!(1000), dec!(1000)),
            snapshot("2023-01-03", dec!(1020), dec!(1000)),
        ]);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, "2023-01-01");
        assert_eq!(series[1].date, "2023-01-02");
        assert_eq!(series[1].total_value, dec!(1000));
        assert_eq!(series[1].net_contribution, dec!(1000));
        assert_eq!(series[2].total_value, dec!(1020));
    }

    #[test]
    fn test_daily_same_day_snapshots_last_wins() {
        let series = build_daily_portfolio_series(&[
            snapshot("2023-01-02T09:00:00Z", dec!(10), dec!(5)),
            snapshot("2023-01-01", dec!(1), dec!(1)),
            snapshot("2023-01-02T17:00:00Z", dec!(12), dec!(6)),
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[1].date, "2023-01-02");
        assert_eq!(series[1].total_value, dec!(12));
        assert_eq!(series[1].net_contribution, dec!(6));
    }

    #[test]
    fn test_daily_missing_contribution_is_zero() {
        let series = build_daily_portfolio_series(&[ValuationSnapshot::new(
            "2023-05-01",
            dec!(250),
            None,
        )]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].net_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_daily_spans_month_boundaries() {
        let series = build_daily_portfolio_series(&[
            snapshot("2024-02-27", dec!(1), dec!(1)),
            snapshot("2024-03-02", dec!(2), dec!(1)),
        ]);
        let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
    }

    #[test]
    fn test_daily_with_malformed_dates_skips_fill() {
        let series = build_daily_portfolio_series(&[
            snapshot("2023-01-01", dec!(1), dec!(1)),
            snapshot("yesterday", dec!(2), dec!(2)),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2023-01-01");
        assert_eq!(series[1].date, "yesterday");
    }

    #[test]
    fn test_daily_empty() {
        assert!(build_daily_portfolio_series(&[]).is_empty());
    }

    #[test]
    fn test_monthly_keeps_closing_value() {
        let daily = build_daily_portfolio_series(&[
            snapshot("2023-01-30", dec!(100), dec!(100)),
            snapshot("2023-02-01", dec!(110), dec!(100)),
            snapshot("2023-02-15", dec!(120), dec!(105)),
        ]);
        let monthly = build_monthly_portfolio_series(&daily);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].date, "2023-01");
        assert_eq!(monthly[0].total_value, dec!(100));
        assert_eq!(monthly[1].date, "2023-02");
        assert_eq!(monthly[1].total_value, dec!(120));
        assert_eq!(monthly[1].net_contribution, dec!(105));
    }
}
