//! The panel owner: authoritative tunable state and the generated editor rows.
//!
//! DESIGN
//! ======
//! [`PanelCore`] holds all state and logic that does not depend on the
//! content tree, so it can be driven directly in tests. [`Panel`] owns a
//! content view plus a core and runs the render cycle:
//!
//! 1. snapshot the core's current values and publish them over the content;
//! 2. render the content, collecting every site's declaration;
//! 3. fold the declarations and hand the registry to [`PanelCore::receive`];
//! 4. build one editor row per label, sorted by label.
//!
//! The snapshot in step 1 is taken before step 3 runs, so anything received or
//! edited during cycle N is first read by sites in cycle N+1.
//!
//! Per label the state moves `Unregistered → Default → Overridden`. Only an
//! explicit [`PanelCore::reset`] brings an overridden label back to its default.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::channel::CurrentValues;
use crate::config::PanelConfig;
use crate::element::Element;
use crate::entry::Editor;
use crate::error::TweakError;
use crate::registry::Registry;
use crate::render::{RenderCx, View};
use crate::value::{AnyValue, Tweakable};

// =============================================================================
// TYPES
// =============================================================================

/// Lifecycle of one label in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// No site has declared the label yet.
    Unregistered,
    /// Declared, never edited (or explicitly reset).
    Default,
    /// Edited at least once since it was last at its default.
    Overridden,
}

/// What the host should do after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    RenderNeeded,
}

/// One generated panel row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    #[serde(flatten)]
    pub editor: Editor,
    pub state: SlotState,
}

/// Output of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelFrame {
    /// 1-based cycle counter.
    pub cycle: u64,
    /// The rendered content tree.
    pub content: Element,
    /// Editor rows sorted by label.
    pub rows: Vec<PanelRow>,
    /// Height hint for the panel area.
    pub max_height: f64,
}

// =============================================================================
// PANEL CORE
// =============================================================================

/// Authoritative tunable state.
#[derive(Debug, Default)]
pub struct PanelCore {
    /// Current value per label. Entries here are the cells the editors write.
    state: Registry,
    /// Declared default per label, as first aggregated.
    defaults: Registry,
    overridden: BTreeSet<String>,
    last_aggregate: Option<Registry>,
}

impl PanelCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Aggregation input ---

    /// Merge one aggregation result into the state.
    ///
    /// Labels already held keep their stored value, edited or not; unseen
    /// labels are added with the aggregated default. An aggregate equal to the
    /// previous one is ignored. Returns the newly added labels.
    pub fn receive(&mut self, aggregate: Registry) -> Vec<String> {
        if self.last_aggregate.as_ref() == Some(&aggregate) {
            tracing::trace!(labels = aggregate.len(), "aggregate unchanged");
            return Vec::new();
        }

        for (label, declared) in aggregate.iter() {
            if let Some(stored) = self.defaults.get(label) {
                if stored.kind() != declared.kind() {
                    tracing::warn!(
                        %label,
                        stored = stored.kind(),
                        declared = declared.kind(),
                        "declared type changed; keeping stored value"
                    );
                }
            }
        }

        self.defaults.absorb(aggregate.clone());
        let added = self.state.absorb(aggregate.clone());
        if !added.is_empty() {
            tracing::debug!(?added, "registered tunables");
        }
        self.last_aggregate = Some(aggregate);
        added
    }

    // --- Edits ---

    /// Apply host input from the label's editor.
    ///
    /// # Errors
    ///
    /// [`TweakError::UnknownLabel`] if the label was never declared,
    /// [`TweakError::InvalidInput`] if the editor rejects the input, or
    /// [`TweakError::TypeMismatch`] if the stored cell no longer matches the
    /// label's entry.
    pub fn edit(&mut self, label: &str, input: &Value) -> Result<PanelAction, TweakError> {
        let template = self.defaults.get(label).ok_or_else(|| unknown(label))?;
        let cell = self.state.cell_mut(label).ok_or_else(|| unknown(label))?;
        let before = cell.clone();
        template.write(label, cell, input)?;
        let changed = *cell != before;
        self.overridden.insert(label.to_owned());
        tracing::debug!(%label, changed, "tunable edited");
        Ok(action(changed))
    }

    /// Replace the label's value outright.
    ///
    /// # Errors
    ///
    /// [`TweakError::UnknownLabel`] if the label was never declared, or
    /// [`TweakError::TypeMismatch`] if `value` is not the label's type.
    pub fn set(&mut self, label: &str, value: AnyValue) -> Result<PanelAction, TweakError> {
        let template = self.defaults.get(label).ok_or_else(|| unknown(label))?;
        let cell = self.state.cell_mut(label).ok_or_else(|| unknown(label))?;
        let changed = *cell != value;
        template.replace(label, cell, value)?;
        self.overridden.insert(label.to_owned());
        tracing::debug!(%label, changed, "tunable set");
        Ok(action(changed))
    }

    /// Put the label back to its recorded default.
    ///
    /// # Errors
    ///
    /// [`TweakError::UnknownLabel`] if the label was never declared.
    pub fn reset(&mut self, label: &str) -> Result<PanelAction, TweakError> {
        let template = self.defaults.get(label).ok_or_else(|| unknown(label))?;
        let cell = self.state.cell_mut(label).ok_or_else(|| unknown(label))?;
        let changed = *cell != *template.value();
        template.replace(label, cell, template.value().clone())?;
        self.overridden.remove(label);
        Ok(action(changed))
    }

    // --- Queries ---

    /// Snapshot to publish on the channel.
    #[must_use]
    pub fn current_values(&self) -> CurrentValues {
        self.state.current_values()
    }

    /// Current value for a label.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&AnyValue> {
        self.state.get(label).map(|entry| entry.value())
    }

    /// Recorded default for a label.
    #[must_use]
    pub fn default_value(&self, label: &str) -> Option<&AnyValue> {
        self.defaults.get(label).map(|entry| entry.value())
    }

    #[must_use]
    pub fn slot_state(&self, label: &str) -> SlotState {
        if !self.state.contains(label) {
            SlotState::Unregistered
        } else if self.overridden.contains(label) {
            SlotState::Overridden
        } else {
            SlotState::Default
        }
    }

    /// One editor row per label, sorted by label.
    ///
    /// # Errors
    ///
    /// [`TweakError::TypeMismatch`] if a stored cell does not match its entry.
    pub fn rows(&self) -> Result<Vec<PanelRow>, TweakError> {
        self.state
            .iter()
            .map(|(label, cell)| -> Result<PanelRow, TweakError> {
                let template = self.defaults.get(label).ok_or_else(|| unknown(label))?;
                let editor = template.make_editor(label, cell.value())?;
                Ok(PanelRow { editor, state: self.slot_state(label) })
            })
            .collect()
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.state.labels()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

fn unknown(label: &str) -> TweakError {
    TweakError::UnknownLabel(label.to_owned())
}

fn action(changed: bool) -> PanelAction {
    if changed { PanelAction::RenderNeeded } else { PanelAction::None }
}

// =============================================================================
// PANEL
// =============================================================================

/// Content tree plus the state that tunes it.
pub struct Panel<V> {
    content: V,
    core: PanelCore,
    config: PanelConfig,
    cycle: u64,
}

impl<V: View> Panel<V> {
    #[must_use]
    pub fn new(content: V) -> Self {
        Self::with_config(content, PanelConfig::default())
    }

    #[must_use]
    pub fn with_config(content: V, config: PanelConfig) -> Self {
        Self { content, core: PanelCore::new(), config, cycle: 0 }
    }

    /// Run one full render cycle.
    ///
    /// # Errors
    ///
    /// [`TweakError::TypeMismatch`] if a stored cell no longer matches its entry.
    pub fn render(&mut self) -> Result<PanelFrame, TweakError> {
        self.cycle += 1;
        let published = self.core.current_values();
        let mut cx = RenderCx::new();
        let content = cx.with_published(published, |cx| self.content.render(cx));
        self.core.receive(cx.finish());
        let rows = self.core.rows()?;
        tracing::trace!(cycle = self.cycle, rows = rows.len(), "panel rendered");
        Ok(PanelFrame { cycle: self.cycle, content, rows, max_height: self.config.max_height })
    }

    /// See [`PanelCore::edit`].
    ///
    /// # Errors
    ///
    /// Same as [`PanelCore::edit`].
    pub fn edit(&mut self, label: &str, input: &Value) -> Result<PanelAction, TweakError> {
        self.core.edit(label, input)
    }

    /// Typed form of [`PanelCore::set`].
    ///
    /// # Errors
    ///
    /// Same as [`PanelCore::set`].
    pub fn set<T: Tweakable>(&mut self, label: &str, value: T) -> Result<PanelAction, TweakError> {
        self.core.set(label, AnyValue::new(value))
    }

    /// See [`PanelCore::reset`].
    ///
    /// # Errors
    ///
    /// Same as [`PanelCore::reset`].
    pub fn reset(&mut self, label: &str) -> Result<PanelAction, TweakError> {
        self.core.reset(label)
    }

    #[must_use]
    pub fn core(&self) -> &PanelCore {
        &self.core
    }

    /// Number of completed cycles.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
