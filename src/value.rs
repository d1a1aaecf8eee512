//! Tunable value types and their type-erased form.
//!
//! A type becomes tunable by implementing [`Tweakable`]: equality (through
//! `PartialEq`) plus an editor made of a [`Control`] description and an
//! [`Tweakable::apply`] handler that folds host input back into a cell of the
//! value. [`AnyValue`] erases the concrete type behind an object-safe trait so
//! heterogeneous values can share one registry; every read back out is a
//! checked downcast.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::any::{Any, TypeId};
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::color::Color;
use crate::consts::{SLIDER_MAX, SLIDER_MIN};
use crate::error::InputError;

/// Editing control for one panel row. Hosts map each variant to a native widget
/// and report user input back as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Bounded numeric slider. Input: a JSON number.
    Slider { value: f64, min: f64, max: f64 },
    /// Color picker. Input: a hex color string.
    ColorPicker { color: Color },
    /// On/off switch. Input: a JSON bool.
    Toggle { on: bool },
}

/// Capability a value type needs to be declared as a tunable.
pub trait Tweakable: Any + Clone + PartialEq + fmt::Debug + Serialize {
    /// Short type name used in diagnostics and mismatch errors.
    const KIND: &'static str;

    /// Control that edits this value.
    fn control(&self) -> Control;

    /// Apply host input from the control to this cell.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the input has the wrong shape for this type.
    fn apply(&mut self, input: &Value) -> Result<(), InputError>;
}

impl Tweakable for f64 {
    const KIND: &'static str = "number";

    fn control(&self) -> Control {
        Control::Slider { value: *self, min: SLIDER_MIN, max: SLIDER_MAX }
    }

    fn apply(&mut self, input: &Value) -> Result<(), InputError> {
        let Some(v) = input.as_f64() else {
            return Err(InputError::rejected("number", input));
        };
        *self = v.clamp(SLIDER_MIN, SLIDER_MAX);
        Ok(())
    }
}

impl Tweakable for Color {
    const KIND: &'static str = "color";

    fn control(&self) -> Control {
        Control::ColorPicker { color: *self }
    }

    fn apply(&mut self, input: &Value) -> Result<(), InputError> {
        match input.as_str().and_then(Color::from_hex) {
            Some(color) => {
                *self = color;
                Ok(())
            }
            None => Err(InputError::rejected("hex color string", input)),
        }
    }
}

impl Tweakable for bool {
    const KIND: &'static str = "bool";

    fn control(&self) -> Control {
        Control::Toggle { on: *self }
    }

    fn apply(&mut self, input: &Value) -> Result<(), InputError> {
        let Some(on) = input.as_bool() else {
            return Err(InputError::rejected("bool", input));
        };
        *self = on;
        Ok(())
    }
}

/// Object-safe view of a [`Tweakable`], implemented once for every such type.
trait DynValue: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_kind(&self) -> &'static str;
    fn dyn_eq(&self, other: &dyn DynValue) -> bool;
    fn clone_box(&self) -> Box<dyn DynValue>;
    fn dyn_control(&self) -> Control;
    fn dyn_apply(&mut self, input: &Value) -> Result<(), InputError>;
    fn dyn_json(&self) -> Value;
}

impl<T: Tweakable> DynValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_kind(&self) -> &'static str {
        T::KIND
    }

    fn dyn_eq(&self, other: &dyn DynValue) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| self == o)
    }

    fn clone_box(&self) -> Box<dyn DynValue> {
        Box::new(self.clone())
    }

    fn dyn_control(&self) -> Control {
        self.control()
    }

    fn dyn_apply(&mut self, input: &Value) -> Result<(), InputError> {
        self.apply(input)
    }

    fn dyn_json(&self) -> Value {
        match serde_json::to_value(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(kind = T::KIND, error = %e, "tunable value failed to serialize; using null");
                Value::Null
            }
        }
    }
}

/// A tunable value with its concrete type erased.
///
/// Equality is true only between values of the same concrete type that compare
/// equal; values of different types are never equal.
pub struct AnyValue(Box<dyn DynValue>);

impl AnyValue {
    /// Erase a concrete tunable value.
    #[must_use]
    pub fn new<T: Tweakable>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Borrow the value as `T`, or `None` if it holds another type.
    #[must_use]
    pub fn downcast_ref<T: Tweakable>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Whether the value holds a `T`.
    #[must_use]
    pub fn is<T: Tweakable>(&self) -> bool {
        self.value_type_id() == TypeId::of::<T>()
    }

    /// Whether both values hold the same concrete type.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        self.value_type_id() == other.value_type_id()
    }

    /// The [`Tweakable::KIND`] of the held type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.0.dyn_kind()
    }

    /// Editing control for the held value.
    #[must_use]
    pub fn control(&self) -> Control {
        self.0.dyn_control()
    }

    /// JSON projection of the held value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        self.0.dyn_json()
    }

    pub(crate) fn apply(&mut self, input: &Value) -> Result<(), InputError> {
        self.0.dyn_apply(input)
    }

    fn value_type_id(&self) -> TypeId {
        Any::type_id(self.0.as_any())
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(&*other.0)
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyValue").field(&self.0).finish()
    }
}

impl Serialize for AnyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
