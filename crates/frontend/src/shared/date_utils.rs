/// Utilities for date and time formatting
///
/// Display format is the Indian day-first style used across the showroom.
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let hm: String = time_part.chars().take(5).collect();
        return format!("{} {}", format_date(date_part), hm);
    }
    format_date(datetime_str)
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time truncated to the minute, as a datetime input expects.
pub fn now_to_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123"), "15/03/2024");
        assert_eq!(
            format_naive_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            "01/06/2024"
        );
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
