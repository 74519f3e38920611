use chrono::{DateTime, Utc};

/// Parses a timestamp as reported by the progress API.
///
/// Accepts RFC 3339 strings and epoch milliseconds (the API has used both).
/// Anything else yields `None`; callers fall back to the raw value.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_millis() {
        let rfc = parse_timestamp("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(rfc, fixed_now());

        let millis = parse_timestamp("1700000000000").unwrap();
        assert_eq!(millis, fixed_now());
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert!(parse_timestamp("  ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
