use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::config::ConfigError;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01T00:00:00Z).
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Converts a point in time into the smallest snowflake created at that time.
///
/// # Arguments
/// - `date` - UTC instant to convert
///
/// # Returns
/// - `Ok(u64)` - `(millis - DISCORD_EPOCH_MS) << 22`
/// - `Err(ConfigError::DateBeforeEpoch)` - `date` lies before the Discord epoch
pub fn snowflake(date: DateTime<Utc>) -> Result<u64, ConfigError> {
    let millis = date.timestamp_millis() - DISCORD_EPOCH_MS;
    if millis < 0 {
        return Err(ConfigError::DateBeforeEpoch(date.to_rfc3339()));
    }

    Ok((millis as u64) << 22)
}

/// Parses an ISO 8601 date from the command line.
///
/// Accepts a full RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC) or a
/// bare `YYYY-MM-DD` (midnight UTC).
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(ConfigError::InvalidDate)` - None of the accepted formats matched
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, ConfigError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(date.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|source| ConfigError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
