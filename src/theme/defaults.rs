//! Per-component theme defaults and icon presets.

use serde::{Deserialize, Serialize};

use crate::props::{Overlay, Shade, Size, Weight};

/// Default visual properties for one component kind.
///
/// Resolvers fall back to these for every option the caller leaves unset.
/// `color` and `label_color` are color tokens: semantic role names or
/// literal colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComponentThemeDefaults {
    pub shade: Shade,
    pub overlay: Overlay,
    pub color: String,
    pub label_color: String,
    pub size: Size,
    pub weight: Weight,
    pub drop_shadow: bool,
    pub rippled: bool,
    pub oversized: bool,
}

impl Default for ComponentThemeDefaults {
    fn default() -> Self {
        Self {
            shade: Shade::Light,
            overlay: Overlay::Opaque,
            color: "primary".to_string(),
            label_color: "text".to_string(),
            size: Size::Normal,
            weight: Weight::Normal,
            drop_shadow: false,
            rippled: false,
            oversized: false,
        }
    }
}

impl ComponentThemeDefaults {
    pub fn color(mut self, token: &str) -> Self {
        self.color = token.to_string();
        self
    }

    pub fn label_color(mut self, token: &str) -> Self {
        self.label_color = token.to_string();
        self
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = shade;
        self
    }

    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn drop_shadow(mut self, on: bool) -> Self {
        self.drop_shadow = on;
        self
    }

    pub fn rippled(mut self, on: bool) -> Self {
        self.rippled = on;
        self
    }

    pub fn oversized(mut self, on: bool) -> Self {
        self.oversized = on;
        self
    }
}

/// A named icon the renderer can draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPreset {
    /// Glyph name within the icon font.
    pub glyph: String,
    /// Icon font family.
    #[serde(default = "default_icon_family")]
    pub family: String,
}

fn default_icon_family() -> String {
    "MaterialIcons".to_string()
}

impl IconPreset {
    /// Creates a preset in the default icon family.
    pub fn new(glyph: &str) -> Self {
        Self {
            glyph: glyph.to_string(),
            family: default_icon_family(),
        }
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }
}
