//! Style tree primitives.
//!
//! This module provides the data model shared by every resolver:
//!
//! - [`StyleValue`]: A concrete leaf (number, text, or flag)
//! - [`StyleGroup`]: Named properties applied to one element
//! - [`StyleTree`]: Named groups making up a component's resolved style
//! - [`merge`]: The one-level override merge applied last
//!
//! The same [`StyleTree`] type is used both for resolver output and for
//! caller-supplied overrides.

mod merge;
mod tree;
mod value;

pub use merge::merge;
pub use tree::{StyleGroup, StyleTree};
pub use value::StyleValue;

/// Well-known group names used by the built-in resolvers.
pub mod groups {
    pub const CONTAINER: &str = "container";
    pub const LABEL: &str = "label";
    pub const ICON: &str = "icon";
    pub const STATUS: &str = "status";
    pub const RIPPLE: &str = "ripple";
    pub const INPUT: &str = "input";
    pub const NAVIGATION: &str = "navigation";
}
