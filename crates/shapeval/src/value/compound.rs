//! Record values: immutable field name to value mappings

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::{Printer, RefValue, Tag, Value};

/// An immutable mapping from field names to values.
///
/// Fields are kept sorted by name, so two records holding the same fields
/// iterate, compare, and print identically no matter how they were built.
/// A record is populated before it is shared; once behind an `Arc` it is
/// never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder pattern).
    ///
    /// Setting a name that is already present replaces its value.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        // Fields are always sorted, so a binary search finds the slot
        self.fields.insert_sorted(name.into(), value);
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Check whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut fields: IndexMap<String, Value> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        fields.sort_keys();
        Self { fields }
    }
}

impl RefValue for Record {
    const TAG: Tag = Tag::Record;

    fn print(&self, p: &mut Printer<'_>) -> fmt::Result {
        p.record(self)
    }

    fn into_value(this: Arc<Self>) -> Value {
        Value::Record(this)
    }

    fn borrow_from(value: &Value) -> Option<&Arc<Self>> {
        match value {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}
