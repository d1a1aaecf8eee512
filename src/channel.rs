//! Downward broadcast of current values.
//!
//! The owner publishes a [`CurrentValues`] snapshot for the subtree it
//! renders. Nodes below see only the innermost published snapshot: publishing
//! replaces what an outer publisher provided rather than patching it.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::{AnyValue, Tweakable};

/// Read-only snapshot of label → current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurrentValues {
    values: BTreeMap<String, AnyValue>,
}

impl CurrentValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: AnyValue) {
        self.values.insert(label.into(), value);
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&AnyValue> {
        self.values.get(label)
    }

    /// Typed lookup that keeps "absent" and "wrong type" apart.
    #[must_use]
    pub fn lookup<T: Tweakable>(&self, label: &str) -> Lookup<T> {
        match self.values.get(label) {
            None => Lookup::Absent,
            Some(value) => match value.downcast_ref::<T>() {
                Some(v) => Lookup::Found(v.clone()),
                None => Lookup::Mismatch { found: value.kind() },
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyValue)> {
        self.values.iter().map(|(label, value)| (label.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, AnyValue)> for CurrentValues {
    fn from_iter<I: IntoIterator<Item = (String, AnyValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

/// Result of a typed channel lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Nothing published for the label.
    Absent,
    /// A value of the requested type.
    Found(T),
    /// A value is published but holds another type.
    Mismatch { found: &'static str },
}

impl<T> Lookup<T> {
    /// The found value, or `default` when absent or mismatched.
    #[must_use]
    pub fn or_default_value(self, default: T) -> T {
        match self {
            Self::Found(v) => v,
            Self::Absent | Self::Mismatch { .. } => default,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Scoped stack of published snapshots.
#[derive(Debug, Default)]
pub struct BroadcastChannel {
    scopes: Vec<CurrentValues>,
}

impl BroadcastChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, values: CurrentValues) {
        self.scopes.push(values);
    }

    pub(crate) fn pop(&mut self) -> Option<CurrentValues> {
        self.scopes.pop()
    }

    /// The innermost published snapshot, if any publisher encloses this point.
    #[must_use]
    pub fn current(&self) -> Option<&CurrentValues> {
        self.scopes.last()
    }

    /// Typed lookup against the innermost snapshot.
    #[must_use]
    pub fn lookup<T: Tweakable>(&self, label: &str) -> Lookup<T> {
        self.current().map_or(Lookup::Absent, |values| values.lookup(label))
    }

    /// Number of enclosing publishers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
