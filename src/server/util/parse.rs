use crate::server::error::AppError;

/// Parses a record id from a path segment.
///
/// Identifiers are positive integers. Anything else cannot name a stored record, so it
/// is reported the same way as a missing one.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `resource` - Resource name used in the error message (e.g. "Form")
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - Value is not a positive integer
pub fn parse_id(value: &str, resource: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("{} not found", resource)))
}

/// Trims a required text field, rejecting blank values.
pub fn require_text(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(value.to_string())
}
