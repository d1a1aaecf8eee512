//! Label-keyed registry of declared tunables.
//!
//! Two merge rules live here and must stay distinct:
//!
//! - [`Registry::merge`] is right-biased. Aggregation uses it so the
//!   later-visited declaration of a label wins outright, default included.
//! - [`Registry::absorb`] is left-biased. The panel uses it so values it
//!   already holds (possibly user edits) survive a fresh aggregation, and only
//!   unseen labels are added.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::channel::CurrentValues;
use crate::entry::Entry;
use crate::value::AnyValue;

/// Mapping from label to [`Entry`], iterated in lexical label order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: BTreeMap<String, Entry>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a single entry.
    #[must_use]
    pub fn single(label: impl Into<String>, entry: Entry) -> Self {
        let mut registry = Self::new();
        registry.entries.insert(label.into(), entry);
        registry
    }

    /// Insert or replace the entry for `label`.
    pub fn insert(&mut self, label: impl Into<String>, entry: Entry) {
        self.entries.insert(label.into(), entry);
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Entry> {
        self.entries.get(label)
    }

    pub(crate) fn cell_mut(&mut self, label: &str) -> Option<&mut AnyValue> {
        self.entries.get_mut(label).map(Entry::value_mut)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Keyed union where `other` wins on collisions.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Keyed union where `self` wins on collisions. Returns the labels that
    /// were newly added, in lexical order.
    pub fn absorb(&mut self, incoming: Self) -> Vec<String> {
        let mut added = Vec::new();
        for (label, entry) in incoming.entries {
            if let btree_map::Entry::Vacant(slot) = self.entries.entry(label) {
                added.push(slot.key().clone());
                slot.insert(entry);
            }
        }
        added
    }

    /// Snapshot of the wrapped values, for publishing on the channel.
    #[must_use]
    pub fn current_values(&self) -> CurrentValues {
        self.entries
            .iter()
            .map(|(label, entry)| (label.clone(), entry.value().clone()))
            .collect()
    }

    /// Entries in lexical label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(label, entry)| (label.as_str(), entry))
    }

    /// Labels in lexical order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
