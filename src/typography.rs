//! Font style templates.
//!
//! A [`FontTemplate`] maps every (weight, size) pair to a complete
//! [`Typography`] record. Sizes select a whole pre-built record; nothing is
//! scaled field by field.

use serde::{Deserialize, Serialize};

use crate::props::{Platform, Size, Weight};
use crate::style::StyleGroup;

/// A complete typography record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_size: f64,
    pub font_weight: String,
    #[serde(default = "normal_font_style")]
    pub font_style: String,
    #[serde(default)]
    pub letter_spacing: f64,
    pub line_height: f64,
}

fn normal_font_style() -> String {
    "normal".to_string()
}

impl Typography {
    fn new(font_size: f64, font_weight: &str, font_style: &str, letter_spacing: f64, line_height: f64) -> Self {
        Self {
            font_size,
            font_weight: font_weight.to_string(),
            font_style: font_style.to_string(),
            letter_spacing,
            line_height,
        }
    }

    /// Writes this record into a style group, replacing existing values.
    pub fn apply_to(&self, group: &mut StyleGroup) {
        group.set("fontSize", self.font_size);
        group.set("fontWeight", self.font_weight.as_str());
        group.set("fontStyle", self.font_style.as_str());
        group.set("letterSpacing", self.letter_spacing);
        group.set("lineHeight", self.line_height);
    }
}

/// The system font family for a platform.
pub fn font_family(platform: Platform) -> &'static str {
    match platform {
        Platform::Ios => "System",
        Platform::Android => "Roboto",
    }
}

/// Typography records for every (weight, size) pair.
///
/// Records are stored in a dense table indexed by weight then size, so every
/// pair always has a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FontTemplate {
    records: [[Typography; 3]; 4],
}

impl FontTemplate {
    /// The built-in template.
    pub fn standard() -> Self {
        let row = |weight: &str, style: &str, spacing: [f64; 3]| {
            [
                Typography::new(12.0, weight, style, spacing[0], 16.0),
                Typography::new(16.0, weight, style, spacing[1], 24.0),
                Typography::new(24.0, weight, style, spacing[2], 32.0),
            ]
        };

        Self {
            // Rows follow `Weight` order, columns follow `Size` order
            records: [
                row("300", "normal", [0.4, 0.5, 0.0]),
                row("400", "normal", [0.4, 0.15, 0.0]),
                row("700", "normal", [0.25, 0.1, 0.0]),
                row("400", "italic", [0.4, 0.15, 0.0]),
            ],
        }
    }

    /// Replaces one record.
    pub fn with_record(mut self, weight: Weight, size: Size, record: Typography) -> Self {
        self.records[weight as usize][size as usize] = record;
        self
    }

    /// Returns the record for a (weight, size) pair.
    pub fn record(&self, weight: Weight, size: Size) -> &Typography {
        &self.records[weight as usize][size as usize]
    }

    /// Iterates every record with its key, in weight then size order.
    pub fn records(&self) -> impl Iterator<Item = (Weight, Size, &Typography)> {
        Weight::ALL.iter().flat_map(move |&weight| {
            Size::ALL
                .iter()
                .map(move |&size| (weight, size, self.record(weight, size)))
        })
    }
}

impl Default for FontTemplate {
    fn default() -> Self {
        Self::standard()
    }
}
