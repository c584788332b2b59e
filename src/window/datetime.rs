use crate::{RelayError, Result};
use chrono::NaiveDateTime;

/// The only timestamp layout accepted, both on the command line and in listings
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD HH:MM` timestamp
///
/// Timestamps carry no timezone and are compared as naive local times.
///
/// # Arguments
///
/// * `datetime_str` - The timestamp string to parse
///
/// # Returns
///
/// * `Ok(NaiveDateTime)` - The parsed timestamp
/// * `Err(RelayError::Format)` - The string does not match the format
///
/// # Example
///
/// ```
/// use listing_relay::window::parse_custom_datetime;
///
/// let dt = parse_custom_datetime("2020-01-01 00:00").unwrap();
/// assert_eq!(dt.to_string(), "2020-01-01 00:00:00");
/// assert!(parse_custom_datetime("2020-01-01 00:00:00").is_err());
/// ```
pub fn parse_custom_datetime(datetime_str: &str) -> Result<NaiveDateTime> {
    let format_error = || {
        RelayError::Format(format!(
            "'{}' is incorrectly formatted. Correct format is: YYYY-MM-DD HH:MM",
            datetime_str
        ))
    };

    // chrono tolerates leading whitespace and a sign before the year
    if !datetime_str.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format_error());
    }

    NaiveDateTime::parse_from_str(datetime_str, DATETIME_FORMAT).map_err(|_| format_error())
}
