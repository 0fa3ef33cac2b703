//! Theme registry: semantic colors, component defaults, icons and fonts.
//!
//! This module provides:
//!
//! - [`ThemeRegistry`]: The immutable theme every resolver reads from
//! - [`ThemeBuilder`]: Fluent construction with alias validation
//! - [`ThemeConfig`]: YAML/JSON theme files layered over a builder
//! - [`ComponentThemeDefaults`]: Per-kind default visual properties
//! - [`detect_shade`]: The OS light/dark preference, with an overridable detector
//!
//! Color roles are layered the same way styles are elsewhere: a role can
//! name a palette color (`@blue-800`), a literal, or another role. Roles are
//! flattened to concrete values when the registry is built.

mod adaptive;
mod config;
mod defaults;
mod error;
mod registry;
mod standard;

pub use adaptive::{detect_shade, set_shade_detector};
pub use config::{ColorEntry, ComponentPatch, FontEntry, ThemeConfig};
pub use defaults::{ComponentThemeDefaults, IconPreset};
pub use error::ThemeError;
pub use registry::{ShadePair, ThemeBuilder, ThemeRegistry, FALLBACK_OPACITY};
