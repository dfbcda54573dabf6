//! Date and time formatting for API timestamps

use chrono::{DateTime, NaiveDate};

/// Format an RFC 3339 timestamp as `DD/MM/YYYY HH:MM` (UTC).
///
/// Anything that does not parse is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str.trim()) {
        Ok(dt) => dt.naive_utc().format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format an ISO date (or the date part of a timestamp) as `DD/MM`
///
/// Used for chart axis labels.
pub fn format_day_month(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31T21:30:00-03:00"), "01/01/2025 00:30");
    }

    #[test]
    fn test_format_day_month() {
        assert_eq!(format_day_month("2024-03-15"), "15/03");
        assert_eq!(format_day_month("2024-03-15T14:02:26.123Z"), "15/03");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
        assert_eq!(format_day_month("15"), "15");
    }
}
