//! Period bucketing for heterogeneous date strings.

use chrono::NaiveDate;

use super::inflation_model::Granularity;
use crate::utils::time_utils::{format_day_key, format_month_key, parse_loose_date};

/// The first `count` characters of `value`, if it has that many.
fn leading_chars(value: &str, count: usize) -> Option<&str> {
    match value.char_indices().nth(count) {
        Some((end, _)) => Some(&value[..end]),
        None if value.chars().count() == count => Some(value),
        None => None,
    }
}

/// Canonical period key for `value` at `granularity`.
///
/// Year keys are the first four characters. Month and day keys are the
/// `YYYY-MM` / `YYYY-MM-DD` prefix when the string is long enough, otherwise
/// the string is parsed and the key rebuilt from calendar fields. Strings that
/// cannot be parsed come back unchanged and act as opaque keys.
pub fn to_period_key(value: &str, granularity: Granularity) -> String {
    let (width, format): (usize, fn(NaiveDate) -> String) = match granularity {
        Granularity::Year => {
            return leading_chars(value, 4).unwrap_or(value).to_string();
        }
        Granularity::Month => (7, format_month_key),
        Granularity::Day => (10, format_day_key),
    };

    if let Some(prefix) = leading_chars(value, width) {
        return prefix.to_string();
    }

    match parse_loose_date(value) {
        Some(date) => format(date),
        None => value.to_string(),
    }
}

/// Sort key giving chronological order for ISO-like dates of any width.
///
/// Parseable dates come first, ordered by calendar date and then by the raw
/// string (so `2020` sorts before `2020-01`). Unparseable strings follow in
/// lexicographic order.
pub fn chronological_key(value: &str) -> (bool, Option<NaiveDate>, String) {
    let head = leading_chars(value, 10).unwrap_or(value);
    let parsed = parse_loose_date(head);
    (parsed.is_none(), parsed, value.to_string())
}

/// Stable chronological sort by the date extracted with `date_of`.
pub fn sort_chronologically<T, F>(items: &mut [T], date_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| chronological_key(date_of(item)));
}
