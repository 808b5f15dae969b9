/// Utilities for date handling
///
/// Display format follows the Vietnamese locale (DD/MM/YYYY); the wire
/// format is ISO `YYYY-MM-DD`.
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Parse an ISO date or datetime string into its calendar date
/// Example: "2024-03-15" or "2024-03-15T14:02:26.123Z" -> 2024-03-15
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Year of a year-picker value: either a bare year ("2019") or a date
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.parse().ok();
    }
    parse_date(trimmed).map(|d| d.year())
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
