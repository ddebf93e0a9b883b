//! Date helpers for table cells and the date-range filter.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Format an ISO timestamp as `YYYY-MM-DD HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
///
/// Values that do not parse are shown as they came.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    value.to_string()
}

/// Date part of an ISO date or timestamp.
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match parse_input_date(date_part) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

/// Parse the value of an `<input type="date">`; empty means "no bound"
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Value for an `<input type="datetime-local">`, e.g. "2024-03-15T14:02"
pub fn input_datetime_value(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%Y-%m-%dT%H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%dT%H:%M").to_string();
    }
    value.to_string()
}

/// First and last day of a month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Bounds of the month before the one containing `date`
pub fn previous_month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    month_bounds(year, month)
}

/// Amount with two decimals and `,` thousands separators
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, decimals) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "2024-12-31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_input_datetime_value() {
        assert_eq!(input_datetime_value("2024-05-01T19:30:00Z"), "2024-05-01T19:30");
        assert_eq!(input_datetime_value("2024-05-01T19:30"), "2024-05-01T19:30");
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(input_value(Some(start)), "2024-02-01");
        assert_eq!(input_value(Some(end)), "2024-02-29");
        let (start, end) = previous_month_bounds(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()).unwrap();
        assert_eq!((input_value(Some(start)), input_value(Some(end))), ("2023-12-01".to_string(), "2023-12-31".to_string()));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-950.0), "-950.00");
    }
}
