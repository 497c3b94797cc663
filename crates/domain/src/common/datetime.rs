//! Date parsing utilities with consistent error handling.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

/// Parses a date from either an RFC3339 timestamp or a plain `YYYY-MM-DD`
/// date (interpreted as midnight UTC).
///
/// Form inputs arrive in both shapes: date pickers produce plain dates,
/// round-tripped records carry full timestamps.
///
/// # Examples
///
/// ```
/// use knights_domain::common::parse_date;
/// use chrono::Datelike;
///
/// let dt = parse_date("2002-05-20T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2002);
///
/// let dt = parse_date("2002-05-20").unwrap();
/// assert_eq!((dt.month(), dt.day()), (5, 20));
/// ```
///
/// # Errors
///
/// Returns `DomainError::Parse` if the string matches neither format.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DomainError::parse(format!("invalid date: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_date("2002-05-20T10:30:00Z").unwrap();
        assert_eq!(dt.year(), 2002);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_rfc3339_with_offset_converts_to_utc() {
        let dt = parse_date("2002-05-20T10:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 5); // 10:30 +05:00 = 05:30 UTC
    }

    #[test]
    fn test_parse_plain_date_is_midnight_utc() {
        let dt = parse_date("2002-05-20").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2002, 5, 20));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("20/05/2002").is_err());
    }
}
