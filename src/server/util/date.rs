use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::AppError;

/// Parses a client-supplied date.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which is taken as
/// midnight UTC.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed timestamp
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Returns true when the value is a date accepted by [`parse_date`].
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_ok()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_plain_date_as_utc_midnight() {
        let parsed = parse_date("2025-03-14").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_date("2025-03-14T10:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 14, 8, 30, 0).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        for value in ["14/03/2025", "2025-13-01", "yesterday", ""] {
            assert!(
                matches!(parse_date(value), Err(AppError::BadRequest(_))),
                "expected BadRequest for {:?}",
                value
            );
        }
    }
}
