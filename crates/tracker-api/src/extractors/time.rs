//! Timestamp parsing for query parameters.

use chrono::{DateTime, NaiveDateTime, Utc};

use tracker_core::error::AppError;

/// `MM-DD-YYYY HH:MM`, read as UTC.
const LEGACY_LAYOUT: &str = "%m-%d-%Y %H:%M";

/// Parse a timestamp query value.
///
/// Accepts RFC 3339 or `MM-DD-YYYY HH:MM` with an optional trailing zone
/// abbreviation, optionally wrapped in single or double quotes. The
/// abbreviation (`UTC`, `GMT`, `MSK`, ...) is not resolved; the legacy layout
/// is always read as UTC.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    let value = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    let legacy = strip_zone_abbreviation(value);
    NaiveDateTime::parse_from_str(legacy, LEGACY_LAYOUT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            AppError::bad_request(format!(
                "Invalid '{field}' timestamp '{raw}': expected RFC 3339 or MM-DD-YYYY HH:MM"
            ))
        })
}

fn strip_zone_abbreviation(value: &str) -> &str {
    match value.rsplit_once(' ') {
        Some((head, zone)) if is_zone_abbreviation(zone) => head.trim_end(),
        _ => value,
    }
}

fn is_zone_abbreviation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse an optional timestamp query value.
pub fn parse_optional(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    raw.filter(|v| !v.trim().is_empty())
        .map(|v| parse_timestamp(field, v))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tracker_core::error::ErrorKind;

    fn expected() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 45, 0).unwrap()
    }

    #[test]
    fn test_parses_rfc3339() {
        assert_eq!(parse_timestamp("after", "2024-05-01T10:45:00Z").unwrap(), expected());
        assert_eq!(
            parse_timestamp("after", "2024-05-01T13:45:00+03:00").unwrap(),
            expected()
        );
    }

    #[test]
    fn test_parses_legacy_layout_with_quotes() {
        assert_eq!(parse_timestamp("before", "05-01-2024 10:45").unwrap(), expected());
        assert_eq!(parse_timestamp("before", "\"05-01-2024 10:45\"").unwrap(), expected());
        assert_eq!(parse_timestamp("before", "'05-01-2024 10:45 UTC'").unwrap(), expected());
    }

    #[test]
    fn test_legacy_zone_abbreviation_is_read_as_utc() {
        for raw in [
            "05-01-2024 10:45 GMT",
            "05-01-2024 10:45 MSK",
            "'05-01-2024 10:45 MST'",
        ] {
            assert_eq!(parse_timestamp("after", raw).unwrap(), expected(), "{raw}");
        }
    }

    #[test]
    fn test_rejects_numeric_suffix() {
        assert!(parse_timestamp("after", "05-01-2024 10:45 +0300").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_timestamp("after", "yesterday").unwrap_err();
        assert!(err.is(ErrorKind::BadRequest));
        assert!(err.message.contains("after"));
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(parse_optional("after", None).unwrap(), None);
        assert_eq!(parse_optional("after", Some("  ")).unwrap(), None);
        assert!(parse_optional("after", Some("05-01-2024 10:45")).unwrap().is_some());
    }
}
