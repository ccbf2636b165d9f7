//! Upsampling of index series by linear interpolation between known points.

use chrono::{Duration, NaiveDate};

use super::inflation_model::{InflationPoint, Resolution};
use super::period_key::sort_chronologically;
use crate::constants::MONTHS_PER_YEAR;
use crate::utils::time_utils::{days_in_month, format_day_key, parse_month_key};

fn is_annual(series: &[InflationPoint]) -> bool {
    series.iter().all(|point| point.date.chars().count() <= 4)
}

fn sorted(series: &[InflationPoint]) -> Vec<InflationPoint> {
    let mut sorted = series.to_vec();
    sort_chronologically(&mut sorted, |point| point.date.as_str());
    sorted
}

/// Expand an annual index to twelve monthly points per year.
///
/// Input that is not purely annual (any key longer than four characters) is
/// returned unchanged. Month `m` of a year ramps linearly toward the next
/// year's value by `(m - 1) / 12`; the final year is held flat. Years whose key
/// is not a number are dropped.
pub fn expand_to_monthly(series: &[InflationPoint]) -> Vec<InflationPoint> {
    if series.is_empty() {
        return Vec::new();
    }
    if !is_annual(series) {
        return series.to_vec();
    }

    let sorted = sorted(series);
    let mut expanded = Vec::with_capacity(sorted.len() * MONTHS_PER_YEAR as usize);

    for (index, current) in sorted.iter().enumerate() {
        let Ok(year) = current.date.trim().parse::<i32>() else {
            continue;
        };
        let next = sorted.get(index + 1);

        for month in 1..=MONTHS_PER_YEAR {
            let value = match next {
                Some(next) => {
                    let ratio = f64::from(month - 1) / f64::from(MONTHS_PER_YEAR);
                    current.value + (next.value - current.value) * ratio
                }
                None => current.value,
            };
            expanded.push(InflationPoint::new(format!("{}-{:02}", year, month), value));
        }
    }

    expanded
}

/// Expand an index to one point per calendar day.
///
/// Annual input is first expanded to months. Day `d` (0-based) of a month
/// ramps toward the next month's value by `d / days_in_month`; the final month
/// is held flat. Months whose key does not parse are dropped.
pub fn expand_to_daily(series: &[InflationPoint]) -> Vec<InflationPoint> {
    let monthly = expand_to_monthly(series);
    if monthly.is_empty() {
        return Vec::new();
    }

    let sorted = sorted(&monthly);
    let mut expanded = Vec::new();

    for (index, current) in sorted.iter().enumerate() {
        let Some((year, month)) = parse_month_key(&current.date) else {
            continue;
        };
        let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        let day_count = days_in_month(year, month);
        let next = sorted.get(index + 1);
        let next_value = next.map_or(current.value, |next| next.value);

        for day in 0..day_count {
            let ratio = if next.is_some() {
                f64::from(day) / f64::from(day_count)
            } else {
                0.0
            };
            let value = current.value + (next_value - current.value) * ratio;
            let date = month_start + Duration::days(i64::from(day));
            expanded.push(InflationPoint::new(format_day_key(date), value));
        }
    }

    expanded
}

/// Expand an index to the granularity matching `resolution`.
pub fn expand_inflation_index(series: &[InflationPoint], resolution: Resolution) -> Vec<InflationPoint> {
    match resolution {
        Resolution::Monthly => expand_to_monthly(series),
        Resolution::Daily => expand_to_daily(series),
    }
}
