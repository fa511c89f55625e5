use chrono::{NaiveDate, NaiveTime};

use crate::server::error::{internal::InternalError, validation::ValidationError, AppError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parses an i32 ID from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed String to `i32`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as an i32
pub fn parse_i32_from_string(value: String) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// Every field must be zero-padded. Rejects impossible days such as `2024-02-30`
/// as well as malformed input.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if !has_shape(value, "dddd-dd-dd") {
        return Err(ValidationError::MalformedDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate(value.to_string()))
}

/// Parses a time of day in zero-padded `HH:MM` form.
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    if !has_shape(value, "dd:dd") {
        return Err(ValidationError::MalformedTime(value.to_string()));
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ValidationError::MalformedTime(value.to_string()))
}

/// Checks `value` against a pattern where `d` stands for an ASCII digit and any other
/// byte must match literally.
fn has_shape(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value
            .bytes()
            .zip(pattern.bytes())
            .all(|(v, p)| match p {
                b'd' => v.is_ascii_digit(),
                _ => v == p,
            })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
