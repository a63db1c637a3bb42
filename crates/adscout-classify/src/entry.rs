//! Typed record shape
//!
//! An in-memory representation of a directory record, used where entries are
//! captured, replayed, or assembled outside of a live search (fixtures,
//! queued imports, test doubles). Implements [`AttributeSource`] so the
//! classification logic treats it identically to the wire shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::source::AttributeSource;

/// A single attribute value.
///
/// Directory attributes carry either text or raw bytes depending on the
/// attribute and on which code path produced the record; multi-valued
/// attributes nest their values in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A single string value.
    String(String),
    /// A single integer value.
    Integer(i64),
    /// A single boolean value.
    Boolean(bool),
    /// Raw bytes.
    Binary(Vec<u8>),
    /// Multiple values, order preserved.
    Array(Vec<AttributeValue>),
}

impl AttributeValue {
    /// The first scalar value: the value itself, or the head of an array.
    fn first(&self) -> Option<&AttributeValue> {
        match self {
            AttributeValue::Array(values) => values.first(),
            other => Some(other),
        }
    }

    /// Text representation of a scalar value. Binary renders lossily as
    /// UTF-8; arrays defer to their first element.
    fn to_text(&self) -> Option<String> {
        match self {
            AttributeValue::String(s) => Some(s.clone()),
            AttributeValue::Integer(i) => Some(i.to_string()),
            AttributeValue::Boolean(b) => Some(b.to_string()),
            AttributeValue::Binary(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            AttributeValue::Array(_) => self.first().and_then(AttributeValue::to_text),
        }
    }

    /// Number of values carried (1 for scalars).
    fn value_count(&self) -> usize {
        match self {
            AttributeValue::Array(values) => values.len(),
            _ => 1,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<i32> for AttributeValue {
    fn from(i: i32) -> Self {
        AttributeValue::Integer(i64::from(i))
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(bytes: Vec<u8>) -> Self {
        AttributeValue::Binary(bytes)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        AttributeValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Typed record shape: attribute name to value(s).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    #[serde(flatten)]
    attributes: HashMap<String, AttributeValue>,
}

impl AttributeMap {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value, replacing any previous value under the same
    /// name (compared case-insensitively).
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        self.attributes
            .retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.attributes.insert(name, value.into());
    }

    /// Set an attribute using the builder pattern.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get an attribute value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the record carries no attributes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over all attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.attributes.iter()
    }
}

impl AttributeSource for AttributeMap {
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| v.value_count() > 0)
    }

    fn first_as_string(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(AttributeValue::first)
            .and_then(AttributeValue::to_text)
    }

    fn all_as_strings(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(AttributeValue::Array(values)) => {
                values.iter().filter_map(AttributeValue::to_text).collect()
            }
            Some(value) => value.to_text().into_iter().collect(),
            None => Vec::new(),
        }
    }

    fn first_as_bytes(&self, name: &str) -> Option<&[u8]> {
        match self.get(name).and_then(AttributeValue::first) {
            Some(AttributeValue::Binary(bytes)) => Some(bytes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AttributeMap {
        AttributeMap::new()
            .with("sAMAccountName", "svc-backup")
            .with("sAMAccountType", 805306368i64)
            .with(
                "objectClass",
                vec!["top", "person", "organizationalPerson", "user"],
            )
            .with("objectSid", vec![1u8, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0])
    }

    #[test]
    fn test_set_replaces_case_insensitively() {
        let mut record = sample_record();
        record.set("samaccountname", "svc-backup2");
        assert_eq!(record.all_as_strings("sAMAccountName").len(), 1);
        assert_eq!(
            record.first_as_string("SAMACCOUNTNAME").as_deref(),
            Some("svc-backup2")
        );
    }

    #[test]
    fn test_has_case_insensitive() {
        let record = sample_record();
        assert!(record.has("OBJECTSID"));
        assert!(record.has("objectclass"));
        assert!(!record.has("mail"));
    }

    #[test]
    fn test_has_empty_array_counts_as_absent() {
        let record = AttributeMap::new().with("memberOf", Vec::<String>::new());
        assert!(!record.has("memberOf"));
    }

    #[test]
    fn test_first_as_string_converts_scalars() {
        let record = sample_record();
        assert_eq!(
            record.first_as_string("sAMAccountType").as_deref(),
            Some("805306368")
        );
        assert_eq!(record.first_as_string("objectClass").as_deref(), Some("top"));
    }

    #[test]
    fn test_first_as_string_missing_is_none() {
        let record = sample_record();
        assert_eq!(record.first_as_string("mail"), None);
    }

    #[test]
    fn test_all_as_strings_order_and_asymmetry() {
        let record = sample_record();
        assert_eq!(
            record.all_as_strings("objectClass"),
            vec!["top", "person", "organizationalPerson", "user"]
        );
        // Missing attribute: empty sequence, never absent
        assert!(record.all_as_strings("memberOf").is_empty());
        assert_eq!(record.first_as_string("memberOf"), None);
    }

    #[test]
    fn test_all_as_strings_single_value() {
        let record = sample_record();
        assert_eq!(record.all_as_strings("sAMAccountName"), vec!["svc-backup"]);
    }

    #[test]
    fn test_first_as_bytes_binary_only() {
        let record = sample_record();
        assert_eq!(
            record.first_as_bytes("objectSid"),
            Some(&[1u8, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0][..])
        );
        // Text-shaped value: no cross-conversion
        assert_eq!(record.first_as_bytes("sAMAccountName"), None);
        assert_eq!(record.first_as_bytes("mail"), None);
    }

    #[test]
    fn test_first_as_bytes_array_of_binary() {
        let record = AttributeMap::new().with(
            "objectSid",
            AttributeValue::Array(vec![AttributeValue::Binary(vec![1, 2, 3])]),
        );
        assert_eq!(record.first_as_bytes("objectSid"), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = AttributeMap::new()
            .with("cn", "Domain Controllers")
            .with("sAMAccountType", 268435456i64)
            .with("objectClass", vec!["top", "group"]);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: AttributeMap = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.first_as_string("cn").as_deref(),
            Some("Domain Controllers")
        );
        assert_eq!(parsed.all_as_strings("objectClass"), vec!["top", "group"]);
    }
}
