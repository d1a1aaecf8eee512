//! Type-erased registry entry.
//!
//! An [`Entry`] carries one declared default and is the only place the
//! registry learns a label's concrete type. Everything that touches a cell on
//! the entry's behalf (building its editor, writing host input back) first
//! checks the cell holds that same type and fails with
//! [`TweakError::TypeMismatch`] otherwise.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use serde::Serialize;
use serde_json::Value;

use crate::error::TweakError;
use crate::value::{AnyValue, Control, Tweakable};

/// One row of the generated panel: a label and the control that edits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Editor {
    pub label: String,
    pub control: Control,
}

/// A declared default with its concrete type erased.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    value: AnyValue,
}

impl Entry {
    /// Wrap a declared default.
    #[must_use]
    pub fn new<T: Tweakable>(value: T) -> Self {
        Self { value: AnyValue::new(value) }
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &AnyValue {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut AnyValue {
        &mut self.value
    }

    /// Concrete type name of the wrapped value.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.value.kind()
    }

    /// True when `other` wraps the same concrete type and the values compare
    /// equal. A type mismatch is simply `false`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// Build the editor row for `label` bound to `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::TypeMismatch`] if `cell` does not hold this entry's type.
    pub fn make_editor(&self, label: &str, cell: &AnyValue) -> Result<Editor, TweakError> {
        self.check_cell(label, cell)?;
        Ok(Editor { label: label.to_owned(), control: cell.control() })
    }

    /// Route host input from the editor into `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::TypeMismatch`] if `cell` does not hold this entry's
    /// type, or [`TweakError::InvalidInput`] if the editor rejects `input`. The
    /// cell is unchanged on error.
    pub fn write(&self, label: &str, cell: &mut AnyValue, input: &Value) -> Result<(), TweakError> {
        self.check_cell(label, cell)?;
        cell.apply(input)
            .map_err(|source| TweakError::InvalidInput { label: label.to_owned(), source })
    }

    /// Replace the contents of `cell` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::TypeMismatch`] if either `cell` or `value` does not
    /// hold this entry's type.
    pub fn replace(&self, label: &str, cell: &mut AnyValue, value: AnyValue) -> Result<(), TweakError> {
        self.check_cell(label, cell)?;
        self.check_cell(label, &value)?;
        *cell = value;
        Ok(())
    }

    fn check_cell(&self, label: &str, cell: &AnyValue) -> Result<(), TweakError> {
        if self.value.same_type(cell) {
            return Ok(());
        }
        tracing::error!(%label, expected = self.kind(), found = cell.kind(), "cell type does not match entry");
        Err(TweakError::TypeMismatch { label: label.to_owned(), expected: self.kind(), found: cell.kind() })
    }
}
