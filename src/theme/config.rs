//! Theme files.
//!
//! A theme file layers changes over a [`ThemeBuilder`], usually the built-in
//! one. Every section is optional:
//!
//! ```yaml
//! palette:
//!   brand-500: "#6200EE"
//! opacities:
//!   translucent: "cc"
//! colors:
//!   primary: { light: "@brand-500", dark: "#BB86FC" }
//!   link: primary            # same value in both shades
//! components:
//!   header:
//!     overlay: translucent-clear
//!     oversized: true
//! icons:
//!   share: { glyph: share }
//! fonts:
//!   - { weight: bold, size: large, fontSize: 28, fontWeight: "700", lineHeight: 36 }
//! ```
//!
//! Component entries only change the fields they name; everything else keeps
//! the value the builder already had.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::props::{ComponentKind, Overlay, Shade, Size, Weight};
use crate::typography::Typography;

use super::defaults::{ComponentThemeDefaults, IconPreset};
use super::error::ThemeError;
use super::registry::{ThemeBuilder, ThemeRegistry};

/// Parsed contents of a theme file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub palette: BTreeMap<String, String>,
    pub opacities: BTreeMap<String, String>,
    pub colors: BTreeMap<String, ColorEntry>,
    pub components: BTreeMap<ComponentKind, ComponentPatch>,
    pub icons: BTreeMap<String, IconPreset>,
    pub fonts: Vec<FontEntry>,
}

/// A color role value, either shared by both shades or split.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Both(String),
    Split { light: String, dark: String },
}

impl ColorEntry {
    fn values(&self) -> (&str, &str) {
        match self {
            ColorEntry::Both(value) => (value, value),
            ColorEntry::Split { light, dark } => (light, dark),
        }
    }
}

/// Partial component defaults; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ComponentPatch {
    pub shade: Option<Shade>,
    pub overlay: Option<Overlay>,
    pub color: Option<String>,
    pub label_color: Option<String>,
    pub size: Option<Size>,
    pub weight: Option<Weight>,
    pub drop_shadow: Option<bool>,
    pub rippled: Option<bool>,
    pub oversized: Option<bool>,
}

impl ComponentPatch {
    /// Writes the fields this patch sets onto `defaults`.
    pub fn apply_to(&self, defaults: &mut ComponentThemeDefaults) {
        if let Some(shade) = self.shade {
            defaults.shade = shade;
        }
        if let Some(overlay) = self.overlay {
            defaults.overlay = overlay;
        }
        if let Some(color) = &self.color {
            defaults.color = color.clone();
        }
        if let Some(label_color) = &self.label_color {
            defaults.label_color = label_color.clone();
        }
        if let Some(size) = self.size {
            defaults.size = size;
        }
        if let Some(weight) = self.weight {
            defaults.weight = weight;
        }
        if let Some(on) = self.drop_shadow {
            defaults.drop_shadow = on;
        }
        if let Some(on) = self.rippled {
            defaults.rippled = on;
        }
        if let Some(on) = self.oversized {
            defaults.oversized = on;
        }
    }
}

/// One typography record of the font template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontEntry {
    pub weight: Weight,
    pub size: Size,
    #[serde(flatten)]
    pub record: Typography,
}

impl ThemeConfig {
    /// Parses YAML theme content.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(source).map_err(|e| ThemeError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Parses JSON theme content.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(source).map_err(|e| ThemeError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Reads and parses a theme file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension isn't `.yaml`, `.yml` or `.json`,
    /// the file can't be read, or its content doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Layers this configuration over a builder.
    pub fn apply(self, mut builder: ThemeBuilder) -> ThemeBuilder {
        for (name, value) in &self.palette {
            builder = builder.palette_color(name, value);
        }
        for (name, suffix) in &self.opacities {
            builder = builder.opacity(name, suffix);
        }
        for (role, entry) in &self.colors {
            let (light, dark) = entry.values();
            builder = builder.color(role, light, dark);
        }
        for (kind, patch) in &self.components {
            builder = builder.update_component(*kind, |defaults| patch.apply_to(defaults));
        }
        for (name, preset) in self.icons {
            builder = builder.icon(&name, preset);
        }
        for entry in self.fonts {
            builder = builder.font_record(entry.weight, entry.size, entry.record);
        }
        builder
    }
}

impl ThemeRegistry {
    /// Builds a registry from YAML layered over the built-in theme.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        ThemeConfig::from_yaml(source)?
            .apply(Self::standard_builder())
            .build()
    }

    /// Builds a registry from JSON layered over the built-in theme.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        ThemeConfig::from_json(source)?
            .apply(Self::standard_builder())
            .build()
    }

    /// Builds a registry from a theme file layered over the built-in theme.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        ThemeConfig::load(path)?
            .apply(Self::standard_builder())
            .build()
    }
}
