//! Upward aggregation of site declarations.
//!
//! Every [`crate::site::Tunable`] rendered under a [`crate::render::RenderCx`]
//! records one emission here. When the pass is over the collector is consumed
//! by [`Collector::fold`], which folds the emissions left to right with the
//! right-biased [`Registry::merge`]. Consuming the collector is what limits
//! the fold to once per pass.

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;

use crate::entry::Entry;
use crate::registry::Registry;

/// Emissions from one render pass, in visitation order.
#[derive(Debug, Default)]
pub struct Collector {
    emissions: Vec<(String, Entry)>,
}

impl Collector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one site's declaration.
    pub fn emit(&mut self, label: impl Into<String>, entry: Entry) {
        self.emissions.push((label.into(), entry));
    }

    /// Labels in emission order, duplicates included.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.emissions.iter().map(|(label, _)| label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }

    /// Fold every emission into one registry; later emissions win.
    #[must_use]
    pub fn fold(self) -> Registry {
        let emitted = self.emissions.len();
        let registry = self
            .emissions
            .into_iter()
            .fold(Registry::new(), |mut acc, (label, entry)| {
                acc.merge(Registry::single(label, entry));
                acc
            });
        tracing::trace!(emitted, labels = registry.len(), "aggregation folded");
        registry
    }
}
