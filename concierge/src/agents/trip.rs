// Trip calendar: duration and per-day dates from the booking window

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

/// Duration used whenever either booking timestamp cannot be parsed.
pub const DEFAULT_TRIP_DAYS: i64 = 3;

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 style date or timestamp down to its calendar date.
///
/// Accepts plain dates, `T` or space separated date-times with optional
/// fractional seconds, numeric UTC offsets and the `Z` designator. The
/// date is taken in the timestamp's own offset.
pub fn parse_trip_date(value: &str) -> Option<NaiveDate> {
    let normalized = value.trim().replace('Z', "+00:00");

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(timestamp.date_naive());
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|timestamp| timestamp.date_naive())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
                .map(|timestamp| timestamp.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok())
}

/// Whole calendar days between check-in and check-out.
///
/// Not clamped: a check-out before check-in yields zero or a negative
/// count. Unparseable input yields [`DEFAULT_TRIP_DAYS`].
pub fn calculate_trip_duration(check_in: &str, check_out: &str) -> i64 {
    match (parse_trip_date(check_in), parse_trip_date(check_out)) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => DEFAULT_TRIP_DAYS,
    }
}

/// Consecutive dates starting at `start`, one per trip day.
pub fn trip_dates(start: NaiveDate, duration: i64) -> Vec<NaiveDate> {
    let days = u64::try_from(duration).unwrap_or(0);
    (0..days)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
