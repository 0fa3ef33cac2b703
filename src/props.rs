//! Enumerated component options.
//!
//! Every option a caller can set on a component that takes one of a fixed
//! set of values lives here. Each enum has a canonical kebab-case name used
//! by theme files, the CLI, and serialized output, and parses back from it
//! via [`FromStr`](std::str::FromStr). Invalid names are rejected at that
//! boundary and never reach the resolver.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a variant of an option enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// The option being parsed, e.g. `overlay`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted names.
    pub expected: String,
}

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical name of the variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::props::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err($crate::props::ParseEnumError {
                        kind: $label,
                        value: other.to_string(),
                        expected: [$($text),+].join(", "),
                    }),
                }
            }
        }
    };
}

named_enum! {
    /// Binary theme axis selecting which color sub-table to use.
    #[derive(Default)]
    Shade as "shade" {
        #[default]
        Light => "light",
        Dark => "dark",
    }
}

named_enum! {
    /// Background treatment of a surface.
    #[derive(Default)]
    Overlay as "overlay" {
        #[default]
        Opaque => "opaque",
        Transparent => "transparent",
        /// Opaque color with a fixed alpha suffix.
        TranslucentClear => "translucent-clear",
        /// Transparent background over a blur-capable surface.
        TranslucentFrosted => "translucent-frosted",
    }
}

named_enum! {
    /// Size key selecting a pre-built template.
    #[derive(Default)]
    Size as "size" {
        Small => "small",
        #[default]
        Normal => "normal",
        Large => "large",
    }
}

named_enum! {
    /// Weight/emphasis key of the font template.
    #[derive(Default)]
    Weight as "weight" {
        Thin => "thin",
        #[default]
        Normal => "normal",
        Bold => "bold",
        Italic => "italic",
    }
}

named_enum! {
    /// Corner treatment of a button.
    #[derive(Default)]
    Shape as "shape" {
        #[default]
        Square => "square",
        Round => "round",
    }
}

named_enum! {
    /// Horizontal text alignment.
    #[derive(Default)]
    Alignment as "alignment" {
        #[default]
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

named_enum! {
    /// Text decoration line.
    #[derive(Default)]
    Decoration as "decoration" {
        #[default]
        None => "none",
        Underline => "underline",
        LineThrough => "line-through",
    }
}

named_enum! {
    /// Target platform; selects platform-specific dimensions and shadows.
    #[derive(Default)]
    Platform as "platform" {
        Ios => "ios",
        #[default]
        Android => "android",
    }
}

named_enum! {
    /// Kinds of component the theme carries defaults for.
    ComponentKind as "component kind" {
        ButtonRaised => "button-raised",
        ButtonFlat => "button-flat",
        TextHeadline => "text-headline",
        TextTitle => "text-title",
        TextSubtitle => "text-subtitle",
        TextParagraph => "text-paragraph",
        TextCaption => "text-caption",
        Header => "header",
        FieldText => "field-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kebab_names() {
        assert_eq!(
            "translucent-frosted".parse::<Overlay>().unwrap(),
            Overlay::TranslucentFrosted
        );
        assert_eq!("line-through".parse::<Decoration>().unwrap(), Decoration::LineThrough);
        assert_eq!("button-flat".parse::<ComponentKind>().unwrap(), ComponentKind::ButtonFlat);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "glossy".parse::<Overlay>().unwrap_err();
        assert_eq!(err.kind, "overlay");
        assert_eq!(err.value, "glossy");
        let msg = err.to_string();
        assert!(msg.contains("translucent-clear"));
        assert!(msg.contains("glossy"));
    }

    #[test]
    fn test_display_matches_parse() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.to_string().parse::<ComponentKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Overlay::TranslucentClear).unwrap();
        assert_eq!(json, "\"translucent-clear\"");
        let shade: Shade = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(shade, Shade::Dark);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Shade::default(), Shade::Light);
        assert_eq!(Overlay::default(), Overlay::Opaque);
        assert_eq!(Size::default(), Size::Normal);
        assert_eq!(Platform::default(), Platform::Android);
        assert_eq!(Weight::default(), Weight::Normal);
        assert_eq!(Shape::default(), Shape::Square);
        assert_eq!(Alignment::default(), Alignment::Left);
        assert_eq!(Decoration::default(), Decoration::None);
    }
}
