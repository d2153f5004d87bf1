/// Utilities for date and time formatting
///
/// The tracking timeline and tables use DD-MM-YYYY dates and 24-hour
/// HH:MM:SS times, both in local time.
use chrono::NaiveDateTime;

/// Split a datetime into the (date, time) string pair used by tracking
/// history rows.
pub fn format_stamp(datetime: NaiveDateTime) -> (String, String) {
    (
        datetime.format("%d-%m-%Y").to_string(),
        datetime.format("%H:%M:%S").to_string(),
    )
}

/// Current local wall clock as a (date, time) pair.
pub fn now_stamp() -> (String, String) {
    format_stamp(chrono::Local::now().naive_local())
}

/// Format ISO datetime string to DD-MM-YYYY
/// Example: "2024-03-15T14:02:26.123Z" -> "15-03-2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}-{}-{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_stamp() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();
        assert_eq!(
            format_stamp(dt),
            ("07-03-2025".to_string(), "09:05:30".to_string())
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
