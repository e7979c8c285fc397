//! Structured field data for a single record
//!
//! This module provides:
//! - `FieldValue`: Scalar payload of one field
//! - `FieldPair`: A named value, used for per-call fields and logger defaults
//! - `Fields`: The full payload of one record, including the reserved
//!   `Timestamp` and `Severity` fields

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Field name holding the record message
pub const MESSAGE_KEY: &str = "message";
/// Reserved field holding the formatted record time
pub const TIMESTAMP_KEY: &str = "Timestamp";
/// Reserved field holding the level name
pub const SEVERITY_KEY: &str = "Severity";

/// Returns `true` for names only the logger may populate
#[inline]
pub fn is_reserved(name: &str) -> bool {
    name == TIMESTAMP_KEY || name == SEVERITY_KEY
}

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u64::from(u))
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A named value destined for a record's payload
///
/// # Example
///
/// ```
/// use field_logger::FieldPair;
///
/// let pair = FieldPair::new("Component", "billing");
/// assert_eq!(pair.name, "Component");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPair {
    pub name: String,
    pub value: FieldValue,
}

impl FieldPair {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> From<(K, V)> for FieldPair {
    fn from((name, value): (K, V)) -> Self {
        FieldPair::new(name, value)
    }
}

/// Upsert `pair` into `pairs`: an existing name is overwritten in place, a new name is appended.
pub(crate) fn upsert(pairs: &mut Vec<FieldPair>, pair: FieldPair) {
    match pairs.iter_mut().find(|existing| existing.name == pair.name) {
        Some(existing) => existing.value = pair.value,
        None => pairs.push(pair),
    }
}

/// Payload of one record.
///
/// Caller fields keep their first-insertion order and are name-unique.
/// `Timestamp` and `Severity` are filled by the logger at format time and
/// always replace caller fields of the same name in the serialized output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    values: Vec<FieldPair>,
    timestamp: String,
    severity: String,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting the value of an existing field with the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        upsert(&mut self.values, FieldPair::new(name, value));
    }

    /// Insert a field only if no field with that name exists yet.
    ///
    /// Returns `true` if the field was added.
    pub fn insert_if_absent(&mut self, pair: &FieldPair) -> bool {
        if self.contains(&pair.name) {
            return false;
        }
        self.values.push(pair.clone());
        true
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|pair| pair.name == name)
            .map(|pair| &pair.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|pair| pair.name == name)
    }

    /// Number of caller fields, as yielded by [`Fields::iter`]. The reserved
    /// `Timestamp` and `Severity` values are not counted.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// `true` when there are no caller fields, whatever the reserved values hold
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Caller fields in insertion order, skipping names that collide with reserved fields
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values
            .iter()
            .filter(|pair| !is_reserved(&pair.name))
            .map(|pair| (pair.name.as_str(), &pair.value))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub(crate) fn set_timestamp(&mut self, timestamp: String) {
        self.timestamp = timestamp;
    }

    pub(crate) fn set_severity(&mut self, severity: &str) {
        self.severity.clear();
        self.severity.push_str(severity);
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(TIMESTAMP_KEY, &self.timestamp)?;
        map.serialize_entry(SEVERITY_KEY, &self.severity)?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
