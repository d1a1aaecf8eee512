//! Live-tunable parameters for tree-structured user interfaces.
//!
//! Call sites anywhere in a rendered tree declare a labeled, typed value with
//! a default ([`site::Tunable`]). Every render pass folds those declarations
//! upward into one [`registry::Registry`], which a single [`panel::Panel`]
//! merges into its editable state. The panel publishes the current values back
//! down the tree on a [`channel::BroadcastChannel`], so every site sharing a
//! label picks up the override on the next pass. Sites never know about each
//! other and nothing is registered up front.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`value`] | The [`value::Tweakable`] capability, editing controls, and type-erased values |
//! | [`color`] | RGBA color type used by the color picker conformance |
//! | [`entry`] | Type-erased registry entry with checked equality and editor construction |
//! | [`registry`] | Label-keyed registry and its two merge rules |
//! | [`channel`] | Downward snapshot of current values with typed lookup |
//! | [`site`] | Per-declaration tunable view node |
//! | [`aggregate`] | Upward collection of site emissions, folded once per pass |
//! | [`render`] | Host composition interface: [`render::View`] and [`render::RenderCx`] |
//! | [`element`] | Rendered scene description |
//! | [`panel`] | Owner of the authoritative state and the generated editing panel |
//! | [`config`] | Environment-driven panel configuration |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (slider range, panel height) |

pub mod aggregate;
pub mod channel;
pub mod color;
pub mod config;
pub mod consts;
pub mod element;
pub mod entry;
pub mod error;
pub mod panel;
pub mod registry;
pub mod render;
pub mod site;
pub mod value;

pub use color::Color;
pub use element::Element;
pub use error::{InputError, TweakError};
pub use panel::{Panel, PanelAction, PanelCore, PanelFrame, SlotState};
pub use render::{RenderCx, Stack, View};
pub use site::{Tunable, ViewExt};
pub use value::{AnyValue, Control, Tweakable};
