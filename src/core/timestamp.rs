//! Timestamp formatting for the reserved `Timestamp` field
//!
//! Every variant produces RFC 3339 text with a UTC offset, so records stay
//! parseable by any consumer regardless of the precision chosen.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Precision of the serialized record time
///
/// # Examples
///
/// ```
/// use field_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&time), "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// RFC 3339 with whole seconds: `2025-01-08T10:30:45Z`
    ///
    /// This is the default wire format.
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123Z`
    Rfc3339Millis,

    /// RFC 3339 with microseconds: `2025-01-08T10:30:45.123456Z`
    ///
    /// Provides higher precision for ordering concurrent records.
    Rfc3339Micros,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        datetime.to_rfc3339_opts(self.seconds_format(), true)
    }

    fn seconds_format(&self) -> SecondsFormat {
        match self {
            TimestampFormat::Rfc3339 => SecondsFormat::Secs,
            TimestampFormat::Rfc3339Millis => SecondsFormat::Millis,
            TimestampFormat::Rfc3339Micros => SecondsFormat::Micros,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_millis_format() {
        let result = TimestampFormat::Rfc3339Millis.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_micros_format() {
        let result = TimestampFormat::Rfc3339Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_every_format_parses_back() {
        for format in [
            TimestampFormat::Rfc3339,
            TimestampFormat::Rfc3339Millis,
            TimestampFormat::Rfc3339Micros,
        ] {
            let text = format.format(&fixed_datetime());
            let parsed = DateTime::parse_from_rfc3339(&text).expect("parseable timestamp");
            assert_eq!(parsed.timestamp(), fixed_datetime().timestamp());
        }
    }

    #[test]
    fn test_zero_instant() {
        let result = TimestampFormat::Rfc3339.format(&DateTime::<Utc>::default());
        assert_eq!(result, "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_default_is_rfc3339() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Rfc3339Millis).expect("serialize");
        assert_eq!(json, "\"rfc3339_millis\"");

        let format: TimestampFormat =
            serde_json::from_str("\"rfc3339_micros\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::Rfc3339Micros);
    }
}
