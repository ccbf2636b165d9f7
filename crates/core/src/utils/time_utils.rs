use chrono::{Datelike, NaiveDate};

/// Every calendar day from `start` to `end`, inclusive.
pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}

/// Gregorian day count of `month` (1-12) in `year`. Invalid months yield 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first
        .and_then(|next| u32::try_from(next.signed_duration_since(first).num_days()).ok())
        .unwrap_or(31)
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Lenient date parse for period strings shorter than their canonical form:
/// `YYYY`, `YYYY-M[M]` and `YYYY-M[M]-D[D]`. Missing parts default to the
/// first month/day.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let mut parts = trimmed.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = match parts.next() {
        Some(raw) => raw.parse::<u32>().ok()?,
        None => 1,
    };
    let day = match parts.next() {
        Some(raw) => raw.parse::<u32>().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Split a `YYYY-MM[...]` key into year and month. Anything after the month
/// is ignored.
pub fn parse_month_key(value: &str) -> Option<(i32, u32)> {
    let mut parts = value.trim().split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// `YYYY-MM-DD` rendering used for day period keys.
pub fn format_day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM` rendering used for month period keys.
pub fn format_month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_is_gregorian() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_get_days_between_inclusive() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let days = get_days_between(start, end);
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], start);
        assert_eq!(days[3], end);
        assert!(get_days_between(end, start).is_empty());
    }

    #[test]
    fn test_parse_loose_date() {
        assert_eq!(parse_loose_date("2020"), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(parse_loose_date("2020-3"), NaiveDate::from_ymd_opt(2020, 3, 1));
        assert_eq!(parse_loose_date("2020-3-7"), NaiveDate::from_ymd_opt(2020, 3, 7));
        assert_eq!(parse_loose_date("2020-02-30"), None);
        assert_eq!(parse_loose_date("Q1-2020"), None);
        assert_eq!(parse_loose_date(""), None);
    }

    #[test]
    fn test_parse_month_key() {
        assert_eq!(parse_month_key("2021-07"), Some((2021, 7)));
        assert_eq!(parse_month_key("2021-07-15"), Some((2021, 7)));
        assert_eq!(parse_month_key("2021"), None);
        assert_eq!(parse_month_key("2021-13"), None);
    }

    #[test]
    fn test_key_formatting() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
        assert_eq!(format_day_key(date), "2021-03-04");
        assert_eq!(format_month_key(date), "2021-03");
    }
}
