//! Record formatters
//!
//! A formatter turns a fully populated [`Fields`] payload into the bytes
//! handed to transports:
//! - `JsonFormatter`: one JSON object per record (default)
//! - `LogfmtFormatter`: `key=value` pairs compatible with log aggregation tools

use super::error::{LoggerError, Result};
use super::fields::{FieldValue, Fields, SEVERITY_KEY, TIMESTAMP_KEY};

/// Serializes one record payload
pub trait Formatter: Send + Sync {
    fn format(&self, fields: &Fields) -> Result<Vec<u8>>;

    /// Short name used in error reports
    fn name(&self) -> &str;
}

/// JSON object formatter
///
/// Example: `{"Timestamp":"2025-01-08T10:30:45Z","Severity":"info","message":"hello","Component":"svc"}`
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line, indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn check_values(&self, fields: &Fields) -> Result<()> {
        for (name, value) in fields.iter() {
            if let FieldValue::Float(f) = value {
                if !f.is_finite() {
                    return Err(LoggerError::formatter(
                        self.name(),
                        format!("non-finite float in field '{}'", name),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, fields: &Fields) -> Result<Vec<u8>> {
        // serde_json would silently write `null` for NaN and infinity
        self.check_values(fields)?;

        let encoded = if self.pretty {
            serde_json::to_vec_pretty(fields)
        } else {
            serde_json::to_vec(fields)
        };
        encoded.map_err(|e| LoggerError::formatter(self.name(), e.to_string()))
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Logfmt formatter (key=value pairs)
///
/// Example: `Timestamp=2025-01-08T10:30:45Z Severity=warn message="disk almost full"`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogfmtFormatter;

impl LogfmtFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Keys are written verbatim so distinct names stay distinct; a name that
    /// cannot appear unquoted in logfmt is rejected instead of rewritten
    fn check_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(LoggerError::formatter(self.name(), "empty field name"));
        }
        if let Some(c) = key.chars().find(|c| Self::needs_quoting(*c)) {
            return Err(LoggerError::formatter(
                self.name(),
                format!("field name {:?} contains {:?}", key, c),
            ));
        }
        Ok(())
    }

    fn needs_quoting(c: char) -> bool {
        c.is_whitespace() || c.is_control() || c == '"' || c == '='
    }

    /// Escape a logfmt value (quoted when empty or holding spaces, quotes,
    /// `=` or control characters)
    fn escape_value(value: &str) -> String {
        if value.is_empty() || value.chars().any(Self::needs_quoting) {
            Self::quote_value(value)
        } else {
            value.to_string()
        }
    }

    fn quote_value(value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c if c.is_control() => quoted.push_str(&format!("\\u{{{:04x}}}", c as u32)),
                c => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

impl Formatter for LogfmtFormatter {
    fn format(&self, fields: &Fields) -> Result<Vec<u8>> {
        let mut parts = Vec::with_capacity(fields.len() + 2);
        parts.push(format!(
            "{}={}",
            TIMESTAMP_KEY,
            Self::escape_value(fields.timestamp())
        ));
        parts.push(format!("{}={}", SEVERITY_KEY, fields.severity()));

        for (name, value) in fields.iter() {
            self.check_key(name)?;
            let formatted = match value {
                FieldValue::String(s) => Self::escape_value(s),
                other => other.to_string(),
            };
            parts.push(format!("{}={}", name, formatted));
        }

        Ok(parts.join(" ").into_bytes())
    }

    fn name(&self) -> &str {
        "logfmt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Fields {
        let mut fields = Fields::new();
        fields.insert("message", "Request completed");
        fields.insert("request_id", "abc-123");
        fields.insert("latency_ms", 42);
        fields.set_timestamp("2025-01-08T10:30:45Z".to_string());
        fields.set_severity("info");
        fields
    }

    #[test]
    fn test_json_format() {
        let bytes = JsonFormatter::new().format(&sample_fields()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["Severity"], "info");
        assert_eq!(parsed["Timestamp"], "2025-01-08T10:30:45Z");
        assert_eq!(parsed["message"], "Request completed");
        assert_eq!(parsed["request_id"], "abc-123");
        assert_eq!(parsed["latency_ms"], 42);
    }

    #[test]
    fn test_json_is_single_line() {
        let bytes = JsonFormatter::new().format(&sample_fields()).unwrap();
        assert!(!bytes.contains(&b'\n'));

        let pretty = JsonFormatter::pretty().format(&sample_fields()).unwrap();
        assert!(pretty.contains(&b'\n'));
    }

    #[test]
    fn test_json_rejects_non_finite_float() {
        let mut fields = sample_fields();
        fields.insert("ratio", f64::NAN);

        let err = JsonFormatter::new().format(&fields).unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
        assert!(err.to_string().contains("ratio"));
    }

    #[test]
    fn test_logfmt_format() {
        let bytes = LogfmtFormatter::new().format(&sample_fields()).unwrap();
        let line = String::from_utf8(bytes).unwrap();

        assert!(line.starts_with("Timestamp=2025-01-08T10:30:45Z Severity=info"));
        assert!(line.contains("message=\"Request completed\""));
        assert!(line.contains("request_id=abc-123"));
        assert!(line.contains("latency_ms=42"));
    }

    #[test]
    fn test_logfmt_escape_special_chars() {
        let mut fields = sample_fields();
        fields.insert("query", "SELECT * FROM users WHERE id=1");
        fields.insert("note", "line one\nline two");

        let line = String::from_utf8(LogfmtFormatter::new().format(&fields).unwrap()).unwrap();

        assert!(line.contains("query=\"SELECT * FROM users WHERE id=1\""));
        assert!(line.contains("note=\"line one\\nline two\""));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_logfmt_escapes_control_chars() {
        let mut fields = sample_fields();
        fields.insert("note", "a\rb\tc\u{7}d");

        let line = String::from_utf8(LogfmtFormatter::new().format(&fields).unwrap()).unwrap();

        assert!(line.contains(r#"note="a\rb\tc\u{0007}d""#));
        assert!(!line.chars().any(|c| c.is_control()));
    }

    #[test]
    fn test_logfmt_keys_are_not_rewritten() {
        let mut fields = sample_fields();
        fields.insert("user.id", 1);
        fields.insert("userid", 2);

        let line = String::from_utf8(LogfmtFormatter::new().format(&fields).unwrap()).unwrap();
        let keys: Vec<&str> = line
            .split(' ')
            .filter_map(|part| part.split_once('=').map(|(key, _)| key))
            .collect();

        assert!(line.contains("user.id=1"));
        assert!(line.contains("userid=2"));
        assert_eq!(keys.iter().filter(|k| **k == "userid").count(), 1);
    }

    #[test]
    fn test_logfmt_rejects_key_needing_quotes() {
        for name in ["user id", "a=b", "say\"hi\"", "tab\there"] {
            let mut fields = sample_fields();
            fields.insert(name, 1);

            let err = LogfmtFormatter::new().format(&fields).unwrap_err();
            assert!(matches!(err, LoggerError::Format { .. }), "{name:?}");
        }
    }

    #[test]
    fn test_logfmt_rejects_unprintable_key() {
        let mut fields = sample_fields();
        fields.insert("  ", 1);

        let err = LogfmtFormatter::new().format(&fields).unwrap_err();
        assert!(matches!(err, LoggerError::Format { .. }));
    }
}
