//! Secret types.
//!
//! [`RawSecret`] is what a backend hands us; [`NormalizedSet`] is the flat,
//! collision-free mapping that gets encrypted and exported.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::core::types::{OriginId, SecretKey};

/// One secret as fetched from a backend, before flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSecret {
    key: SecretKey,
    value: String,
    origin_id: OriginId,
}

impl RawSecret {
    /// Create a raw secret from its name, payload, and source identifier.
    pub fn new(
        key: impl Into<SecretKey>,
        value: impl Into<String>,
        origin_id: impl Into<OriginId>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            origin_id: origin_id.into(),
        }
    }

    /// Name of the secret in its source store.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw payload, possibly JSON.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source identifier (ARN).
    pub fn origin_id(&self) -> &str {
        &self.origin_id
    }
}

/// A single flattened value and the secret it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    value: String,
    origin_id: OriginId,
}

impl NormalizedEntry {
    pub fn new(value: impl Into<String>, origin_id: impl Into<OriginId>) -> Self {
        Self {
            value: value.into(),
            origin_id: origin_id.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn origin_id(&self) -> &str {
        &self.origin_id
    }
}

/// Flat mapping from dotted key path to entry.
///
/// Keys are unique and kept sorted, so serialization is stable. Only the
/// normalizer inserts; everything else treats a set as read-only and
/// replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedSet {
    entries: BTreeMap<SecretKey, NormalizedEntry>,
}

impl NormalizedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&NormalizedEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, SecretKey, NormalizedEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Insert a key that the caller has already checked is vacant.
    pub(crate) fn insert_vacant(&mut self, key: SecretKey, entry: NormalizedEntry) {
        debug_assert!(!self.entries.contains_key(&key));
        self.entries.insert(key, entry);
    }
}

impl<'a> IntoIterator for &'a NormalizedSet {
    type Item = (&'a SecretKey, &'a NormalizedEntry);
    type IntoIter = btree_map::Iter<'a, SecretKey, NormalizedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
