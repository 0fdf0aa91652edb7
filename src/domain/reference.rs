//! Reference mapping of external documentation sites

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Base URL of a dependency's documentation site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceEntry {
    /// Base URL, usually ending in `latest/` until rewritten
    pub url: String,
    /// Optional inventory location, carried through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<String>,
}

impl ReferenceEntry {
    /// Creates an entry with no inventory
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            inventory: None,
        }
    }

    /// Sets the inventory location (builder pattern)
    pub fn with_inventory(mut self, inventory: impl Into<String>) -> Self {
        self.inventory = Some(inventory.into());
        self
    }
}

/// Documentation base URLs keyed by dependency name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceMapping(BTreeMap<String, ReferenceEntry>);

impl ReferenceMapping {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry
    pub fn insert(&mut self, name: impl Into<String>, entry: ReferenceEntry) {
        self.0.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&ReferenceEntry> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Replaces the URL of an existing entry, keeping its inventory
    ///
    /// Returns false (and adds nothing) if `name` is not mapped.
    pub fn set_url(&mut self, name: &str, url: impl Into<String>) -> bool {
        match self.0.get_mut(name) {
            Some(entry) => {
                entry.url = url.into();
                true
            }
            None => false,
        }
    }

    /// Merges `other` into this mapping, `other` winning on conflicts
    pub fn extend(&mut self, other: ReferenceMapping) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ReferenceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ReferenceEntry)> for ReferenceMapping {
    fn from_iter<I: IntoIterator<Item = (String, ReferenceEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceMapping {
    type Item = (&'a String, &'a ReferenceEntry);
    type IntoIter = btree_map::Iter<'a, String, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
