//! Tunable declaration sites.
//!
//! [`ViewExt::tweakable`] wraps any view in a [`Tunable`]. On every render the
//! site resolves its value from the channel (falling back to its own default),
//! hands the value and the wrapped content to its content function, and emits
//! its label for aggregation. The emitted entry always carries the declared
//! default, never the resolved value.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::channel::{BroadcastChannel, Lookup};
use crate::element::Element;
use crate::entry::Entry;
use crate::render::{RenderCx, View};
use crate::value::Tweakable;

/// One tunable declaration wrapping `inner`.
pub struct Tunable<V, T, F> {
    inner: V,
    label: String,
    default: T,
    content: F,
}

impl<V, T, F> Tunable<V, T, F>
where
    V: View,
    T: Tweakable,
    F: Fn(Element, T) -> Element,
{
    #[must_use]
    pub fn new(inner: V, label: impl Into<String>, default: T, content: F) -> Self {
        Self { inner, label: label.into(), default, content }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Value this site would render with under `channel`.
    #[must_use]
    pub fn resolve(&self, channel: &BroadcastChannel) -> T {
        match channel.lookup::<T>(&self.label) {
            Lookup::Found(value) => value,
            Lookup::Absent => self.default.clone(),
            Lookup::Mismatch { found } => {
                tracing::debug!(label = %self.label, declared = T::KIND, found, "published value has another type; using default");
                self.default.clone()
            }
        }
    }
}

impl<V, T, F> View for Tunable<V, T, F>
where
    V: View,
    T: Tweakable,
    F: Fn(Element, T) -> Element,
{
    fn render(&self, cx: &mut RenderCx) -> Element {
        let content = self.inner.render(cx);
        let value = self.resolve(cx.channel());
        let out = (self.content)(content, value);
        cx.emit(self.label.clone(), Entry::new(self.default.clone()));
        out
    }
}

/// Adds [`ViewExt::tweakable`] to every view.
pub trait ViewExt: View + Sized {
    /// Declare a tunable named `label` around this view.
    ///
    /// `content` receives this view's rendered output and the resolved value.
    fn tweakable<T, F>(self, label: impl Into<String>, default: T, content: F) -> Tunable<Self, T, F>
    where
        T: Tweakable,
        F: Fn(Element, T) -> Element,
    {
        Tunable::new(self, label, default, content)
    }
}

impl<V: View> ViewExt for V {}
