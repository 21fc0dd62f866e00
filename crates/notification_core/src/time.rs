//! Conversions between chrono instants and the epoch-millisecond form stored on
//! a [`NotificationDescriptor`](crate::descriptor::NotificationDescriptor).
//!
//! Reads come back in the host's local time zone. Conversions that cross a civil
//! time discontinuity (a daylight-saving jump, say) follow chrono's local-time
//! semantics and are not promised to round-trip through naive local values; the
//! instant itself always round-trips.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use crate::error::ParseError;

/// Stored in place of a timestamp or interval that has not been set.
pub const UNSET_MILLIS: i64 = -1;

/// Milliseconds since 1970-01-01T00:00:00Z, floored.
pub fn to_epoch_millis<Tz: TimeZone>(value: &DateTime<Tz>) -> i64 {
    value.timestamp_millis()
}

/// Inverse of [`to_epoch_millis`]. Out-of-range input saturates to the nearest
/// instant chrono can represent.
pub fn from_epoch_millis(millis: i64) -> DateTime<Local> {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    });
    utc.with_timezone(&Local)
}

/// Parses intervals such as `90s`, `15m`, `1h 30m` or `1h30m`.
pub fn parse_interval(input: &str) -> Result<Duration, ParseError> {
    let invalid = |reason: &str| ParseError::InvalidInterval {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let mut total_seconds: i64 = 0;
    let mut digits = String::new();
    let mut saw_component = false;

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if ch.is_whitespace() {
            if !digits.is_empty() {
                return Err(invalid("missing unit, possible values: h, m, s"));
            }
            continue;
        }
        if digits.is_empty() {
            return Err(invalid("unit without a value"));
        }
        let value: i64 = digits.parse().map_err(|_| invalid("value out of range"))?;
        let factor = match ch {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid("invalid unit, possible values: h, m, s")),
        };
        total_seconds = value
            .checked_mul(factor)
            .and_then(|secs| total_seconds.checked_add(secs))
            .ok_or_else(|| invalid("value out of range"))?;
        digits.clear();
        saw_component = true;
    }

    if !digits.is_empty() {
        return Err(invalid("missing unit, possible values: h, m, s"));
    }
    if !saw_component {
        return Err(invalid("empty interval"));
    }

    Duration::try_seconds(total_seconds).ok_or_else(|| invalid("value out of range"))
}
