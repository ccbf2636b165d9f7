//! Metrics derived from an aligned comparison sequence.
//!
//! Every function here is a pure function of the comparison points.

use super::comparison_calculator::is_nonzero;
use super::comparison_model::{ComparisonPoint, ComparisonStats, ExcessReturnPoint, InterestPoint};

/// Profit and inflation percentages of a point relative to the first point.
struct PercentPoint {
    profit_percent: f64,
    inflation_percent: f64,
}

fn percent_point(point: &ComparisonPoint, base_nominal: f64, base_inflation: f64) -> PercentPoint {
    // First usable of: contribution, starting value, 1.
    let capital = [point.net_contribution, base_nominal]
        .into_iter()
        .find(|value| is_nonzero(*value))
        .unwrap_or(1.0);

    let profit_percent = (point.nominal - point.net_contribution) / capital * 100.0;
    let inflation_percent = if is_nonzero(base_inflation) {
        (point.inflation_index - base_inflation) / base_inflation * 100.0
    } else {
        0.0
    };

    PercentPoint {
        profit_percent,
        inflation_percent,
    }
}

fn percent_points(points: &[ComparisonPoint]) -> Vec<(&ComparisonPoint, PercentPoint)> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let (base_nominal, base_inflation) = (first.nominal, first.inflation_index);

    points
        .iter()
        .map(|point| (point, percent_point(point, base_nominal, base_inflation)))
        .collect()
}

/// Excess return over inflation for every comparison point.
pub fn build_excess_return_series(points: &[ComparisonPoint]) -> Vec<ExcessReturnPoint> {
    percent_points(points)
        .into_iter()
        .map(|(point, percent)| ExcessReturnPoint {
            period: point.period.clone(),
            outperformance: percent.profit_percent - percent.inflation_percent,
        })
        .collect()
}

/// Profit percent and inflation percent for every comparison point.
pub fn build_interest_series(points: &[ComparisonPoint]) -> Vec<InterestPoint> {
    percent_points(points)
        .into_iter()
        .map(|(point, percent)| InterestPoint {
            period: point.period.clone(),
            interest: percent.profit_percent,
            inflation: percent.inflation_percent,
        })
        .collect()
}

fn percent_change(first: f64, last: f64) -> f64 {
    if is_nonzero(first) {
        (last - first) / first * 100.0
    } else {
        0.0
    }
}

/// First-to-last changes, or `None` when fewer than two points exist.
pub fn build_summary_stats(points: &[ComparisonPoint]) -> Option<ComparisonStats> {
    if points.len() < 2 {
        return None;
    }
    let (first, last) = (points.first()?, points.last()?);

    Some(ComparisonStats {
        nominal_change: percent_change(first.nominal, last.nominal),
        real_change: percent_change(first.real, last.real),
        inflation_change: percent_change(first.inflation_index, last.inflation_index),
        latest_nominal: last.nominal,
        latest_real: last.real,
        latest_inflation_index: last.inflation_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(period: &str, nominal: f64, index: f64, contribution: f64) -> ComparisonPoint {
        ComparisonPoint {
            period: period.to_string(),
            nominal,
            real: nominal / (index / 100.0),
            inflation_index: index,
            net_contribution: contribution,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_excess_return_uses_contribution_as_capital() {
        let series = build_excess_return_series(&[
            point("2023-01", 1000.0, 100.0, 1000.0),
            point("2023-02", 1100.0, 105.0, 1000.0),
        ]);

        assert_eq!(series.len(), 2);
        assert_close(series[0].outperformance, 0.0);
        // 10% profit against 5% inflation.
        assert_close(series[1].outperformance, 5.0);
    }

    #[test]
    fn test_capital_falls_back_to_base_nominal_then_one() {
        let with_base = build_interest_series(&[
            point("2023-01", 200.0, 100.0, 0.0),
            point("2023-02", 250.0, 100.0, 0.0),
        ]);
        assert_close(with_base[1].interest, 125.0);

        let with_one = build_interest_series(&[
            point("2023-01", 0.0, 100.0, 0.0),
            point("2023-02", 3.0, 100.0, 0.0),
        ]);
        assert_close(with_one[1].interest, 300.0);
    }

    #[test]
    fn test_interest_reports_inflation_percent() {
        let series = build_interest_series(&[
            point("2023", 100.0, 100.0, 100.0),
            point("2024", 100.0, 103.0, 100.0),
        ]);
        assert_close(series[1].interest, 0.0);
        assert_close(series[1].inflation, 3.0);
    }

    #[test]
    fn test_metrics_empty_input() {
        assert!(build_excess_return_series(&[]).is_empty());
        assert!(build_interest_series(&[]).is_empty());
        assert!(build_summary_stats(&[]).is_none());
    }

    #[test]
    fn test_stats_need_two_points() {
        assert!(build_summary_stats(&[point("2023-01", 1.0, 100.0, 1.0)]).is_none());

        let stats = build_summary_stats(&[
            point("2023-01", 1000.0, 100.0, 1000.0),
            point("2023-02", 1100.0, 110.0, 1000.0),
        ])
        .unwrap();
        assert_close(stats.nominal_change, 10.0);
        assert_close(stats.real_change, 0.0);
        assert_close(stats.inflation_change, 10.0);
        assert_eq!(stats.latest_nominal, 1100.0);
        assert_eq!(stats.latest_inflation_index, 110.0);
    }

    #[test]
    fn test_stats_zero_start_is_zero_change() {
        let stats = build_summary_stats(&[
            point("2023-01", 0.0, 100.0, 0.0),
            point("2023-02", 50.0, 100.0, 0.0),
        ])
        .unwrap();
        assert_eq!(stats.nominal_change, 0.0);
        assert_eq!(stats.real_change, 0.0);
    }
}
