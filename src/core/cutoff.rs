//! Reporting cutoff day
//!
//! Client hours are reconciled through the Friday of the current week. Once
//! that Friday falls past the current day of the month (it lies in the next
//! month), the cutoff becomes the last day of the month.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Friday on or after `today`
pub fn friday_of_week(today: NaiveDate) -> NaiveDate {
    let today_idx = today.weekday().num_days_from_monday();
    let friday_idx = Weekday::Fri.num_days_from_monday();
    let days_ahead = (friday_idx + 7 - today_idx) % 7;
    today + Duration::days(i64::from(days_ahead))
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Last day of the month whose hours are compared
pub fn cutoff_day(today: NaiveDate) -> u32 {
    let friday = friday_of_week(today).day();
    if today.day() > friday {
        last_day_of_month(today.year(), today.month())
    } else {
        friday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_friday_of_week() {
        assert_eq!(friday_of_week(date(2026, 10, 12)), date(2026, 10, 16));
        assert_eq!(friday_of_week(date(2026, 10, 16)), date(2026, 10, 16));
        assert_eq!(friday_of_week(date(2026, 10, 17)), date(2026, 10, 23));
        assert_eq!(friday_of_week(date(2026, 12, 29)), date(2027, 1, 1));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2026, 10), 31);
        assert_eq!(last_day_of_month(2026, 11), 30);
        assert_eq!(last_day_of_month(2026, 12), 31);
        assert_eq!(last_day_of_month(2026, 2), 28);
        assert_eq!(last_day_of_month(2024, 2), 29);
    }

    #[test]
    fn test_cutoff_is_friday_within_month() {
        // Monday → that week's Friday
        assert_eq!(cutoff_day(date(2026, 10, 12)), 16);
        // Friday itself
        assert_eq!(cutoff_day(date(2026, 10, 16)), 16);
        // Saturday looks ahead to the next Friday
        assert_eq!(cutoff_day(date(2026, 10, 17)), 23);
    }

    #[test]
    fn test_cutoff_is_month_end_once_friday_wraps() {
        assert_eq!(cutoff_day(date(2026, 10, 31)), 31);
        assert_eq!(cutoff_day(date(2026, 12, 29)), 31);
        assert_eq!(cutoff_day(date(2024, 2, 28)), 29);
    }
}
