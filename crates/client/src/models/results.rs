//! Search results as a table and as flat records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// One row of a [`ResultTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Positional values, parallel to `fields` when fields are known.
    Values(Vec<Value>),
    /// A keyed record.
    Record(Map<String, Value>),
    /// A lone scalar.
    Scalar(Value),
}

/// Field list plus rows derived from a results payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub fields: Vec<String>,
    pub rows: Vec<Row>,
    /// The results array as Splunk sent it; `rows` has one entry per element.
    pub raw_results: Option<Vec<Value>>,
}

/// A flat, ordered field-name to string mapping handed to output writers.
///
/// Keys keep insertion order; inserting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    entries: Vec<(String, String)>,
}

impl NormalizedRecord {
    /// Key used when no field structure is available.
    pub const RAW_KEY: &'static str = "_raw";

    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding only `_raw`.
    pub fn raw(value: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(Self::RAW_KEY, value);
        record
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NormalizedRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
