//! Calendar helpers for the month/year selectors on report screens.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// First and last day of the given month, or `None` for an invalid month.
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month_first.pred_opt()?))
}

/// Every Sunday falling inside the given month, in order. Empty for an
/// invalid month.
pub fn sundays_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some((first, last)) = month_range(year, month) else {
        return Vec::new();
    };

    let offset = (7 - i64::from(first.weekday().num_days_from_sunday())) % 7;
    let mut sunday = first + Duration::days(offset);

    let mut sundays = Vec::with_capacity(5);
    while sunday <= last {
        sundays.push(sunday);
        sunday += Duration::days(7);
    }
    sundays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_range_covers_whole_month() {
        assert_eq!(
            month_range(2024, 6),
            Some((date(2024, 6, 1), date(2024, 6, 30)))
        );
        assert_eq!(
            month_range(2024, 12),
            Some((date(2024, 12, 1), date(2024, 12, 31)))
        );
    }

    #[test]
    fn month_range_handles_leap_february() {
        assert_eq!(
            month_range(2024, 2),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            month_range(2023, 2),
            Some((date(2023, 2, 1), date(2023, 2, 28)))
        );
    }

    #[test]
    fn month_range_rejects_invalid_month() {
        assert_eq!(month_range(2024, 0), None);
        assert_eq!(month_range(2024, 13), None);
    }

    #[test]
    fn sundays_in_june_2024() {
        assert_eq!(
            sundays_in_month(2024, 6),
            vec![
                date(2024, 6, 2),
                date(2024, 6, 9),
                date(2024, 6, 16),
                date(2024, 6, 23),
                date(2024, 6, 30),
            ]
        );
    }

    #[test]
    fn sundays_when_month_starts_on_sunday() {
        // September 2024 starts on a Sunday
        let sundays = sundays_in_month(2024, 9);
        assert_eq!(sundays.first(), Some(&date(2024, 9, 1)));
        assert_eq!(sundays.len(), 5);
    }

    #[test]
    fn sundays_for_invalid_month_is_empty() {
        assert!(sundays_in_month(2024, 13).is_empty());
    }
}
