use crate::server::error::{validation::ValidationError, AppError};

/// Parses a record ID from a path segment or body field.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed positive ID
/// - `Err(AppError::ValidationErr(InvalidId))` - Not a positive integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId.into()),
    }
}

/// Reads the leading integer of a string the way a lenient form parser would.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"12abc"` yields 12. Returns `None` when no digits lead the
/// string or the value is zero, letting callers fall back to a default.
pub fn parse_int_lenient(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].parse::<i64>().ok()?;

    match magnitude {
        0 => None,
        n if negative => Some(-n),
        n => Some(n),
    }
}
