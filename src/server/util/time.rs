//! Week arithmetic. Weeks start on Monday 00:00 UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// Returns the Monday of the week containing `at`.
pub fn week_start(at: DateTime<Utc>) -> NaiveDate {
    monday_of(at.date_naive())
}

/// Returns the Monday of the week before the one containing `at`.
///
/// This is the week a reset running at `at` archives into.
pub fn previous_week_start(at: DateTime<Utc>) -> NaiveDate {
    week_start(at) - Duration::days(7)
}

/// Returns the Monday on or before `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_of_midweek_is_previous_monday() {
        let at = Utc.with_ymd_and_hms(2026, 1, 8, 15, 30, 0).unwrap();
        assert_eq!(week_start(at), date(2026, 1, 5));
    }

    #[test]
    fn week_start_of_monday_midnight_is_same_day() {
        let at = Utc.with_ymd_and_hms(2026, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(week_start(at), date(2026, 1, 12));
    }

    #[test]
    fn sunday_belongs_to_preceding_monday() {
        let at = Utc.with_ymd_and_hms(2026, 1, 11, 23, 59, 59).unwrap();
        assert_eq!(week_start(at), date(2026, 1, 5));
    }

    #[test]
    fn previous_week_when_cron_fires() {
        let at = Utc.with_ymd_and_hms(2026, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(previous_week_start(at), date(2026, 1, 5));
    }

    #[test]
    fn detects_monday() {
        assert!(is_monday(date(2026, 1, 5)));
        assert!(!is_monday(date(2026, 1, 6)));
    }
}
