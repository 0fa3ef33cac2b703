//! Named colors and opacity suffixes.
//!
//! The palette is the bottom layer of a theme: a flat map of color names to
//! hex values, plus a map of opacity names to two-hex-digit alpha suffixes.
//! Theme color tables refer to palette entries as `@name`.

use std::collections::BTreeMap;

const STANDARD_COLORS: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("grey-50", "#FAFAFA"),
    ("grey-100", "#F5F5F5"),
    ("grey-200", "#EEEEEE"),
    ("grey-300", "#E0E0E0"),
    ("grey-400", "#BDBDBD"),
    ("grey-500", "#9E9E9E"),
    ("grey-600", "#757575"),
    ("grey-700", "#616161"),
    ("grey-800", "#424242"),
    ("grey-900", "#212121"),
    ("blue-300", "#64B5F6"),
    ("blue-500", "#2196F3"),
    ("blue-800", "#1565C0"),
    ("teal-300", "#4DB6AC"),
    ("teal-700", "#00796B"),
    ("pink-300", "#F06292"),
    ("pink-a400", "#F50057"),
    ("red-300", "#E57373"),
    ("red-700", "#D32F2F"),
    ("green-300", "#81C784"),
    ("green-700", "#388E3C"),
    ("amber-300", "#FFD54F"),
    ("amber-700", "#FFA000"),
    ("light-blue-300", "#4FC3F7"),
    ("light-blue-700", "#0288D1"),
];

const STANDARD_OPACITIES: &[(&str, &str)] = &[
    ("opaque", "ff"),
    ("translucent", "dd"),
    ("shadow", "42"),
    ("ripple", "33"),
    ("muted", "8a"),
    ("faint", "1f"),
];

/// Named colors and opacity suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
    opacities: BTreeMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in palette.
    pub fn standard() -> Self {
        let mut palette = Self::new();
        for (name, hex) in STANDARD_COLORS {
            palette.insert_color(name, hex);
        }
        for (name, suffix) in STANDARD_OPACITIES {
            palette.insert_opacity(name, suffix);
        }
        palette
    }

    /// Adds or replaces a named color, returning the palette for chaining.
    pub fn with_color(mut self, name: &str, value: &str) -> Self {
        self.insert_color(name, value);
        self
    }

    /// Adds or replaces a named opacity suffix, returning the palette for chaining.
    pub fn with_opacity(mut self, name: &str, suffix: &str) -> Self {
        self.insert_opacity(name, suffix);
        self
    }

    pub fn insert_color(&mut self, name: &str, value: &str) {
        self.colors.insert(name.to_string(), value.to_string());
    }

    pub fn insert_opacity(&mut self, name: &str, suffix: &str) {
        self.opacities.insert(name.to_string(), suffix.to_string());
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn opacity(&self, name: &str) -> Option<&str> {
        self.opacities.get(name).map(String::as_str)
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn opacities(&self) -> impl Iterator<Item = (&str, &str)> {
        self.opacities.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.opacities.is_empty()
    }
}

/// Returns true if `suffix` is exactly two hex digits.
pub fn is_opacity_suffix(suffix: &str) -> bool {
    suffix.len() == 2 && suffix.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true if `value` is a color the renderer accepts as-is.
///
/// Accepted: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`,
/// `rgba(...)`, and the keywords `transparent`, `white`, `black`.
pub fn is_color_literal(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if (value.starts_with("rgb(") || value.starts_with("rgba(")) && value.ends_with(')') {
        return true;
    }
    matches!(value, "transparent" | "white" | "black")
}
