//! Half-hour grid alignment and the API's minute-precision timestamp format.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Timelike, Utc};

use crate::error::{CoreError, CoreResult};

/// Native granularity of the intensity API.
pub const HALF_HOUR: TimeDelta = TimeDelta::minutes(30);

/// Trailing window covered by a region time-series chart.
pub const SERIES_WINDOW: TimeDelta = TimeDelta::hours(24);

const API_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Floor `t` onto the half-hour grid: minutes become 0 or 30, seconds and
/// sub-seconds are dropped. `:59` goes to `:30` of the same hour.
pub fn round_to_half_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    let excess_minutes = i64::from(t.minute() % 30);
    let excess = TimeDelta::minutes(excess_minutes)
        + TimeDelta::seconds(i64::from(t.second()))
        + TimeDelta::nanoseconds(i64::from(t.nanosecond()));
    t - excess
}

/// `YYYY-MM-DDTHH:MMZ`, no seconds.
pub fn format_api_timestamp(t: DateTime<Utc>) -> String {
    t.format(API_FORMAT).to_string()
}

/// Parse an API timestamp. Falls back to RFC 3339 for payloads carrying seconds.
pub fn parse_api_timestamp(input: &str) -> CoreResult<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, API_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::InvalidTimestamp {
            input: input.to_string(),
        })
}

/// `[t, t + 30 min)` for a historical snapshot request.
pub fn historical_window(t: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (t, t + HALF_HOUR)
}

/// Trailing 24 hours ending at `now`.
pub fn series_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - SERIES_WINDOW, now)
}
