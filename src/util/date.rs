//! UTC calendar helpers for daily and weekly pearl windows.
//!
//! Pearls reset at UTC midnight and leaderboards run Sunday to Sunday, so every
//! window boundary is computed here in UTC regardless of the host time zone.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Days elapsed since the most recent Sunday, 0 on Sunday through 6 on Saturday.
pub fn days_since_sunday(now: DateTime<Utc>) -> u32 {
    now.weekday().num_days_from_sunday()
}

/// Midnight UTC at the start of `now`'s day.
pub fn utc_day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Midnight UTC of the most recent Sunday, moved back `weeks_back` weeks.
///
/// On a Sunday, `weeks_back = 0` returns that same day's midnight.
///
/// # Arguments
/// - `now` - Reference instant
/// - `weeks_back` - Number of whole weeks to step back from the current week
///
/// # Returns
/// - `DateTime<Utc>` - Start of the selected week
pub fn sunday_start(now: DateTime<Utc>, weeks_back: u32) -> DateTime<Utc> {
    let days = i64::from(days_since_sunday(now)) + i64::from(weeks_back) * 7;
    utc_day_start(now) - Duration::days(days)
}
