//! Values handed to the stub renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;

/// Identifier of a stub (template) in the stub store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StubRef(String);

impl StubRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StubRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StubRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Key/value data substituted into a stub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateData(BTreeMap<String, Value>);

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Rendered form of `key`: strings without quotes, other values as JSON.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.0.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Add every entry of `defaults` whose key is not already present.
    pub fn merge_defaults(&mut self, defaults: TemplateData) {
        for (key, value) in defaults.0 {
            self.0.entry(key).or_insert(value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Parse a `key=value` pair as given on the command line.
    ///
    /// The value is read as JSON when it parses (`count=3`, `flag=true`) and
    /// kept as a plain string otherwise.
    pub fn parse_pair(pair: &str) -> Result<(String, Value), DomainError> {
        let invalid = || DomainError::InvalidOption {
            option: "data",
            value: pair.to_string(),
            expected: "key=value",
        };

        let (key, raw) = pair.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok((key.to_string(), value))
    }
}

impl FromIterator<(String, Value)> for TemplateData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn caller_values_win_over_defaults() {
        let mut data = TemplateData::new().with("name", "custom");
        data.merge_defaults(TemplateData::new().with("name", "user").with("kind", "model"));

        assert_eq!(data.get_str("name").as_deref(), Some("custom"));
        assert_eq!(data.get_str("kind").as_deref(), Some("model"));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn parse_pair_reads_json_or_string() {
        assert_eq!(
            TemplateData::parse_pair("count=3").unwrap(),
            ("count".into(), json!(3))
        );
        assert_eq!(
            TemplateData::parse_pair("table=user_roles").unwrap(),
            ("table".into(), json!("user_roles"))
        );
        assert_eq!(
            TemplateData::parse_pair("empty=").unwrap(),
            ("empty".into(), json!(""))
        );
    }

    #[test]
    fn parse_pair_requires_key() {
        assert!(TemplateData::parse_pair("novalue").is_err());
        assert!(TemplateData::parse_pair("=x").is_err());
    }

    #[test]
    fn non_string_values_render_as_json() {
        let data = TemplateData::new().with("soft", true).with("n", 2);
        assert_eq!(data.get_str("soft").as_deref(), Some("true"));
        assert_eq!(data.get_str("n").as_deref(), Some("2"));
    }
}
