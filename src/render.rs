//! Host composition interface.
//!
//! A render pass walks a tree of [`View`]s with one [`RenderCx`] threaded
//! through every call. The context provides the two primitives the tunable
//! feedback loop needs from any host:
//!
//! - downward: [`RenderCx::with_published`] scopes a [`CurrentValues`]
//!   snapshot over a subtree, read back with [`RenderCx::channel`];
//! - upward: [`RenderCx::emit`] records a declaration, and
//!   [`RenderCx::finish`] folds all of them once the pass is done.
//!
//! Hosts with their own node types implement [`View`] for them; [`Element`],
//! [`Stack`] and [`FnView`] cover the common leaf and container cases.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::aggregate::Collector;
use crate::channel::{BroadcastChannel, CurrentValues};
use crate::element::Element;
use crate::entry::Entry;
use crate::registry::Registry;

/// A node in the rendered tree.
pub trait View {
    fn render(&self, cx: &mut RenderCx) -> Element;
}

/// State threaded through one render pass.
#[derive(Debug, Default)]
pub struct RenderCx {
    channel: BroadcastChannel,
    collector: Collector,
}

impl RenderCx {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel as seen from the node currently rendering.
    #[must_use]
    pub fn channel(&self) -> &BroadcastChannel {
        &self.channel
    }

    /// Record a declaration for this pass's aggregation.
    pub fn emit(&mut self, label: impl Into<String>, entry: Entry) {
        self.collector.emit(label, entry);
    }

    /// Number of declarations recorded so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.collector.len()
    }

    /// Run `f` with `values` published to everything it renders.
    pub fn with_published<R>(&mut self, values: CurrentValues, f: impl FnOnce(&mut Self) -> R) -> R {
        self.channel.push(values);
        let out = f(self);
        self.channel.pop();
        out
    }

    /// End the pass and fold every declaration into one registry.
    #[must_use]
    pub fn finish(self) -> Registry {
        self.collector.fold()
    }
}

impl View for Element {
    fn render(&self, _cx: &mut RenderCx) -> Element {
        self.clone()
    }
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&self, cx: &mut RenderCx) -> Element {
        (**self).render(cx)
    }
}

impl<V: View + ?Sized> View for &V {
    fn render(&self, cx: &mut RenderCx) -> Element {
        (**self).render(cx)
    }
}

/// Siblings rendered left to right into an [`Element::Stack`].
#[derive(Default)]
pub struct Stack {
    children: Vec<Box<dyn View>>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }
}

impl View for Stack {
    fn render(&self, cx: &mut RenderCx) -> Element {
        Element::stack(self.children.iter().map(|child| child.render(cx)).collect())
    }
}

/// A view defined by a closure over the render context.
pub struct FnView<F>(pub F);

impl<F: Fn(&mut RenderCx) -> Element> View for FnView<F> {
    fn render(&self, cx: &mut RenderCx) -> Element {
        (self.0)(cx)
    }
}
