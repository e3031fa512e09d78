//! Per-page filter state shared by every admin list page.
//!
//! Each list page owns a [`FilterSet`] with a fixed set of keys. Values are
//! plain strings; the empty string means "unset". Applying the filters yields
//! exactly the non-empty entries, which become the query string of the next
//! collection request.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter key: {0}")]
    UnknownKey(String),
}

/// Ordered mapping from fixed filter keys to current string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(&'static str, String)>,
}

impl FilterSet {
    /// Creates a filter set with every key unset.
    pub fn new(keys: &'static [&'static str]) -> Self {
        Self {
            entries: keys.iter().map(|k| (*k, String::new())).collect(),
        }
    }

    /// Creates a filter set seeded from query-string pairs. Pairs whose key is
    /// not in `keys` are ignored; keys missing from `pairs` stay unset.
    pub fn seeded<I, K, V>(keys: &'static [&'static str], pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::new(keys);
        for (key, value) in pairs {
            // unknown keys in the URL are simply dropped
            let _ = filters.set_known(key.as_ref(), value.into());
        }
        filters
    }

    fn set_known(&mut self, key: &str, value: String) -> bool {
        for entry in &mut self.entries {
            if entry.0 == key {
                entry.1 = value;
                return true;
            }
        }
        false
    }

    /// Updates exactly the named key, leaving every other entry untouched.
    pub fn set<S: Into<String>>(&mut self, key: &str, value: S) -> Result<(), FilterError> {
        if self.set_known(key, value.into()) {
            Ok(())
        } else {
            Err(FilterError::UnknownKey(key.to_string()))
        }
    }

    /// Raw stored value, empty string when unset. `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The applied value of a key: `Some` only when non-empty. No trimming,
    /// no other falsy handling.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Resets every key to the empty string.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.1.clear();
        }
    }

    /// Exactly the entries with a non-empty value, in fixed key order.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str()))
            .collect()
    }

    /// True when no filter is applied.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_empty())
    }

    /// The applied entries plus an optional page number, ready to be encoded
    /// into the next collection request.
    pub fn request_params(&self, page: Option<usize>) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if let Some(page) = page {
            params.push(("page".to_string(), page.to_string()));
        }
        params
    }

    /// URL-encoded form of [`FilterSet::params`], used to build pagination
    /// links that carry the current filters along.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self.params()).unwrap_or_default()
    }
}

/// Serialized as a map over all keys (empty values included) so templates can
/// prefill every filter input.
impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
