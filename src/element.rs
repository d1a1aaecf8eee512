//! Rendered scene description.
//!
//! [`Element`] is what views produce. It is a plain tree a host can walk to
//! draw native widgets, or serialize and ship elsewhere. Modifier variants wrap
//! a single child the way view modifiers wrap their content.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::Serialize;

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Renders nothing.
    Empty,
    Text { text: String },
    /// Uniform inset around the child.
    Padding { amount: f64, child: Box<Element> },
    /// Translation of the child without affecting layout.
    Offset { x: f64, y: f64, child: Box<Element> },
    /// Foreground (text/stroke) color for the child.
    Foreground { color: Color, child: Box<Element> },
    /// Fill drawn behind the child.
    Background { color: Color, child: Box<Element> },
    /// Children laid out in order.
    Stack { children: Vec<Element> },
}

impl Element {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub fn stack(children: Vec<Element>) -> Self {
        Self::Stack { children }
    }

    #[must_use]
    pub fn padding(self, amount: f64) -> Self {
        Self::Padding { amount, child: Box::new(self) }
    }

    #[must_use]
    pub fn offset(self, x: f64, y: f64) -> Self {
        Self::Offset { x, y, child: Box::new(self) }
    }

    #[must_use]
    pub fn foreground(self, color: Color) -> Self {
        Self::Foreground { color, child: Box::new(self) }
    }

    #[must_use]
    pub fn background(self, color: Color) -> Self {
        Self::Background { color, child: Box::new(self) }
    }

    /// The wrapped child of a modifier, or `None` for leaves and stacks.
    #[must_use]
    pub fn child(&self) -> Option<&Element> {
        match self {
            Self::Padding { child, .. }
            | Self::Offset { child, .. }
            | Self::Foreground { child, .. }
            | Self::Background { child, .. } => Some(&**child),
            Self::Empty | Self::Text { .. } | Self::Stack { .. } => None,
        }
    }

    /// Text of every `Text` leaf, depth first.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Empty => {}
            Self::Text { text } => out.push(text),
            Self::Stack { children } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
            Self::Padding { child, .. }
            | Self::Offset { child, .. }
            | Self::Foreground { child, .. }
            | Self::Background { child, .. } => child.collect_texts(out),
        }
    }
}
