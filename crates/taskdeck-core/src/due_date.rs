//! Due-date parsing for sorting and edit-field normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a due date as sent by the backend.
///
/// Accepts a bare calendar date (`2024-01-01`, midnight UTC), an RFC 3339
/// timestamp, or a zone-less `YYYY-MM-DDTHH:MM[:SS[.fff]]` timestamp taken
/// as UTC.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|dt| dt.and_utc())
}

/// Milliseconds since the epoch used as the due-date sort key.
///
/// Missing or unparseable dates map to 0, so they sort as the epoch itself.
pub fn sort_instant(raw: Option<&str>) -> i64 {
    raw.and_then(parse)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Strip any time-of-day component, leaving the calendar date an edit
/// field expects.
pub fn normalize(raw: &str) -> &str {
    match raw.split_once('T') {
        Some((date, _)) => date,
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_date_as_utc_midnight() {
        let dt = parse("2024-01-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn parses_timestamps() {
        assert!(parse("2024-01-01T10:00:00Z").is_some());
        assert!(parse("2024-01-01T10:00:00+02:00").is_some());
        assert!(parse("2024-01-01T10:00:00.250").is_some());
        assert!(parse("2024-01-01T10:00").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("tomorrow").is_none());
        assert!(parse("2024-13-40").is_none());
    }

    #[test]
    fn missing_and_invalid_dates_sort_at_epoch_zero() {
        assert_eq!(sort_instant(None), 0);
        assert_eq!(sort_instant(Some("")), 0);
        assert_eq!(sort_instant(Some("not a date")), 0);
        assert_eq!(sort_instant(Some("1970-01-01")), 0);
        assert!(sort_instant(Some("2024-01-01")) > 0);
    }

    #[test]
    fn normalize_strips_time_of_day() {
        assert_eq!(normalize("2024-05-06T00:00:00.000Z"), "2024-05-06");
        assert_eq!(normalize("2024-05-06"), "2024-05-06");
        assert_eq!(normalize(""), "");
    }
}
