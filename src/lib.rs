//! # Livery
//!
//! Theme-driven style resolution for mobile UI components.
//!
//! A [`ThemeRegistry`] maps semantic color roles to concrete values per
//! [`Shade`], holds an opacity table, a font template and per-component
//! defaults. Component configurations ([`Button`], [`Text`], [`TextField`],
//! [`Header`]) resolve against it into a concrete [`StyleTree`] that a
//! renderer can consume directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use livery::{Button, Shade, StyleContext, StyleTree};
//!
//! let ctx = StyleContext::standard().shade(Shade::Dark);
//! let overrides = StyleTree::new().with("container", "minWidth", 120);
//!
//! let resolved = Button::raised("Save").resolve(&ctx, Some(&overrides));
//! assert_eq!(resolved.style.get("container", "minWidth").and_then(|v| v.as_number()), Some(120.0));
//! ```
//!
//! ## Modules
//!
//! - [`theme`]: the registry, its builder, theme files and shade detection
//! - [`component`]: component configurations and their resolvers
//! - [`style`]: style trees and the one-level override merge
//! - [`animation`]: the animator collaborator and a deterministic [`Timeline`]
//! - [`layout`]: placement of header children into rooms
//!
//! The library never installs a `tracing` subscriber. Configuration problems
//! that have a sensible fallback are reported as `tracing` warnings.

#[macro_use]
pub mod props;

pub mod animation;
pub mod component;
pub mod inspect;
pub mod layout;
pub mod palette;
pub mod style;
pub mod theme;
pub mod typography;
mod util;

pub use animation::{AnimationCommand, AnimationId, Animator, Easing, Timeline};
pub use component::{
    Animate, Button, Header, HeaderController, Minimization, ResolvedButton, ResolvedField,
    ResolvedHeader, ResolvedText, StyleContext, Surface, Text, TextField,
};
pub use layout::{place_in_rooms, Room, RoomChild, RoomContent, Rooms};
pub use palette::Palette;
pub use props::{
    Alignment, ComponentKind, Decoration, Overlay, ParseEnumError, Platform, Shade, Shape, Size,
    Weight,
};
pub use style::{merge, StyleGroup, StyleTree, StyleValue};
pub use theme::{detect_shade, set_shade_detector, ThemeBuilder, ThemeError, ThemeRegistry};
pub use typography::{FontTemplate, Typography};
pub use util::truncate_to_width;
