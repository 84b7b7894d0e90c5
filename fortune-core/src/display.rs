//! Display formatting for horoscope dates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Date-only layouts accepted from the API, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%m/%d/%Y"];

/// Date-time layouts without an offset.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Render a calendar date in the long Japanese form, e.g. `2024年3月21日`.
pub fn long_date<D: Datelike>(date: &D) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Try every supported layout and return the calendar date it names.
///
/// Offset-bearing timestamps keep their own offset's calendar date.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.date_naive());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return Some(date);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|parsed| parsed.date())
}

/// Format an extracted date value for display.
///
/// Parseable values become a long date, other non-blank text passes through
/// trimmed, and a missing value renders `now`.
pub fn display_date(value: Option<&str>, now: &DateTime<FixedOffset>) -> String {
    let Some(text) = value.map(str::trim).filter(|text| !text.is_empty()) else {
        return long_date(now);
    };

    match parse_calendar_date(text) {
        Some(date) => long_date(&date),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-01T09:30:00+09:00").unwrap()
    }

    #[test]
    fn renders_parseable_dates_long_form() {
        assert_eq!(display_date(Some("2024-03-21"), &now()), "2024年3月21日");
        assert_eq!(display_date(Some("2024-03-21T23:10:00+09:00"), &now()), "2024年3月21日");
        assert_eq!(display_date(Some("March 5, 2024"), &now()), "2024年3月5日");
        assert_eq!(display_date(Some("Jan 02, 2025"), &now()), "2025年1月2日");
        assert_eq!(display_date(Some("12/31/2023"), &now()), "2023年12月31日");
        assert_eq!(display_date(Some("2024-03-21 08:00:00"), &now()), "2024年3月21日");
    }

    #[test]
    fn passes_through_unparseable_text() {
        assert_eq!(display_date(Some("  today-ish  "), &now()), "today-ish");
    }

    #[test]
    fn missing_value_renders_now() {
        assert_eq!(display_date(None, &now()), "2024年6月1日");
        assert_eq!(display_date(Some("   "), &now()), "2024年6月1日");
    }
}
