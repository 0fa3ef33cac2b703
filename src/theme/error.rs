//! Theme construction errors.

use std::path::PathBuf;

use crate::props::Shade;

/// Error returned when a theme cannot be built or loaded.
///
/// These only occur while constructing a [`ThemeRegistry`](super::ThemeRegistry).
/// Once built, a registry never fails a lookup; unknown names fall back
/// with a logged warning instead.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A color role references a palette entry that doesn't exist.
    #[error("color '{role}' ({shade}) references unknown palette color '@{name}'")]
    UnknownPaletteColor {
        role: String,
        shade: Shade,
        name: String,
    },

    /// A color role aliases a role that doesn't exist.
    #[error("color '{role}' ({shade}) aliases non-existent color '{target}'")]
    UnresolvedAlias {
        role: String,
        shade: Shade,
        target: String,
    },

    /// Color role aliases form a cycle.
    #[error("cycle detected in color aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// A palette color is not a renderable color literal.
    #[error("palette color '{name}' has invalid value '{value}'")]
    InvalidPaletteColor { name: String, value: String },

    /// An opacity suffix is not exactly two hex digits.
    #[error("opacity '{name}' must be two hex digits, got '{value}'")]
    InvalidOpacity { name: String, value: String },

    /// A theme file could not be parsed.
    #[error("failed to parse {format} theme: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A theme file could not be read.
    #[error("failed to read theme file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme file has an extension no loader handles.
    #[error("unsupported theme file '{}' (expected .yaml, .yml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },
}
