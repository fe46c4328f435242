//! Result records produced by one extraction run.

use derive_getters::Getters;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from key to extracted value.
///
/// Keeps keys in the order they were first inserted. Inserting an existing
/// key replaces its value in place.
///
/// Serializes as a JSON object that omits keys without a value. Keys that
/// are canonical array indices (`"0"`, `"17"`, not `"07"`) are written first
/// in ascending numeric order, the rest follow in insertion order. This is
/// the property order JavaScript engines give plain objects, so the output
/// lines match what a `JSON.stringify` based bot prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, Option<String>)>,
}

impl FieldMap {
    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a key. The outer `Option` is whether the key matched at all.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Whether `key` matched.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of matched keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Parse `key` as a canonical array index: decimal, no sign, no leading
/// zero, below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut present: Vec<_> = self
            .entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v)))
            .collect();
        // Stable: non-index keys keep insertion order behind the indices.
        present.sort_by_key(|(k, _)| match array_index(k) {
            Some(index) => (0, index),
            None => (1, 0),
        });
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (key, value) in present {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Fields extracted from one message, attributed to its author.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ResultRecord {
    /// Author's username
    user: String,
    /// Matched keys and their values
    data: FieldMap,
}

impl ResultRecord {
    /// Create a record.
    pub fn new(user: impl Into<String>, data: FieldMap) -> Self {
        Self {
            user: user.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_index_is_canonical() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("42"), Some(42));
        assert_eq!(array_index("4294967294"), Some(4_294_967_294));
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index("07"), None);
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index("1.5"), None);
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("score"), None);
    }
}
