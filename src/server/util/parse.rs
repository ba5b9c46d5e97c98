use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::server::error::launch::LaunchError;

/// Naive formats accepted for launch dates, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parses a launch date into a UTC instant.
///
/// Accepts RFC 3339 timestamps with any offset, offset-less date-times (treated as UTC)
/// and bare dates (midnight UTC).
///
/// # Arguments
/// - `value` - The date string supplied by the client
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed instant
/// - `Err(LaunchError::InvalidLaunchDate)` - None of the accepted formats matched
pub fn parse_launch_date(value: &str) -> Result<DateTime<Utc>, LaunchError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| LaunchError::InvalidLaunchDate(value.to_string()))
}
