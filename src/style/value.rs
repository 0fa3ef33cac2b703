//! Leaf values of a style tree.

use serde::{Deserialize, Serialize};

/// A concrete, renderable style value.
///
/// Resolved trees only ever hold these primitives: colors are already
/// looked up, dimensions are plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(StyleValue::from(56).as_number(), Some(56.0));
        assert_eq!(StyleValue::from("row").as_text(), Some("row"));
        assert_eq!(StyleValue::from(true).as_bool(), Some(true));
        assert_eq!(StyleValue::from("row").as_number(), None);
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<StyleValue> = serde_json::from_str(r##"[1.5, "#fff", false]"##).unwrap();
        assert_eq!(
            values,
            vec![
                StyleValue::Number(1.5),
                StyleValue::Text("#fff".into()),
                StyleValue::Bool(false)
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(StyleValue::from(0.5f64).to_string(), "0.5");
        assert_eq!(StyleValue::from(148).to_string(), "148");
        assert_eq!(StyleValue::from("transparent").to_string(), "transparent");
    }
}
