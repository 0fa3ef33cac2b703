//! The built-in theme.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::palette::Palette;
use crate::props::{ComponentKind, Size, Weight};

use super::defaults::{ComponentThemeDefaults, IconPreset};
use super::registry::{ThemeBuilder, ThemeRegistry};

const STANDARD_ROLES: &[(&str, &str, &str)] = &[
    ("primary", "@blue-800", "@blue-300"),
    ("secondary", "@teal-700", "@teal-300"),
    ("accent", "@pink-a400", "@pink-300"),
    ("background", "@grey-50", "@grey-900"),
    ("surface", "@white", "@grey-800"),
    ("text", "rgba(0, 0, 0, 0.87)", "@white"),
    ("muted", "rgba(0, 0, 0, 0.54)", "rgba(255, 255, 255, 0.7)"),
    ("on-primary", "@white", "@grey-900"),
    ("divider", "rgba(0, 0, 0, 0.12)", "rgba(255, 255, 255, 0.12)"),
    ("disabled", "@grey-400", "@grey-700"),
    ("disabled-text", "rgba(0, 0, 0, 0.38)", "rgba(255, 255, 255, 0.5)"),
    ("error", "@red-700", "@red-300"),
    ("warning", "@amber-700", "@amber-300"),
    ("success", "@green-700", "@green-300"),
    ("info", "@light-blue-700", "@light-blue-300"),
    ("shadow", "@black", "@black"),
];

/// Roles the component resolvers look up by name.
pub(crate) const REQUIRED_ROLES: &[&str] = &[
    "primary",
    "text",
    "muted",
    "on-primary",
    "divider",
    "disabled",
    "disabled-text",
    "error",
    "shadow",
];

const STANDARD_ICONS: &[(&str, &str)] = &[
    ("menu", "menu"),
    ("back", "arrow-back"),
    ("close", "close"),
    ("search", "search"),
    ("more", "more-vert"),
    ("check", "check"),
    ("add", "add"),
    ("edit", "edit"),
    ("delete", "delete"),
];

static STANDARD_DEFAULTS: Lazy<BTreeMap<ComponentKind, ComponentThemeDefaults>> =
    Lazy::new(|| {
        let base = ComponentThemeDefaults::default();
        let text = base.clone().label_color("text").color("text");

        BTreeMap::from([
            (
                ComponentKind::ButtonRaised,
                base.clone()
                    .label_color("on-primary")
                    .weight(Weight::Bold)
                    .drop_shadow(true)
                    .rippled(true),
            ),
            (
                ComponentKind::ButtonFlat,
                base.clone()
                    .label_color("primary")
                    .weight(Weight::Bold)
                    .rippled(true),
            ),
            (ComponentKind::TextHeadline, text.clone().size(Size::Large)),
            (ComponentKind::TextTitle, text.clone().weight(Weight::Bold)),
            (
                ComponentKind::TextSubtitle,
                text.clone().color("muted").weight(Weight::Thin),
            ),
            (ComponentKind::TextParagraph, text.clone()),
            (
                ComponentKind::TextCaption,
                text.color("muted").size(Size::Small),
            ),
            (
                ComponentKind::Header,
                base.clone()
                    .label_color("on-primary")
                    .weight(Weight::Bold)
                    .drop_shadow(true),
            ),
            (ComponentKind::FieldText, base.label_color("muted")),
        ])
    });

static STANDARD_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(|| {
    builder()
        .build()
        .unwrap_or_else(|err| panic!("built-in theme is invalid: {err}"))
});

/// Builder preloaded with the built-in palette, roles, defaults and icons.
pub(crate) fn builder() -> ThemeBuilder {
    let mut builder = ThemeBuilder::new().palette(Palette::standard());
    for (role, light, dark) in STANDARD_ROLES {
        builder = builder.color(role, light, dark);
    }
    for (kind, defaults) in STANDARD_DEFAULTS.iter() {
        builder = builder.component(*kind, defaults.clone());
    }
    for (name, glyph) in STANDARD_ICONS {
        builder = builder.icon(name, IconPreset::new(glyph));
    }
    builder
}

pub(crate) fn registry() -> &'static ThemeRegistry {
    &STANDARD_REGISTRY
}

pub(crate) fn defaults_for(kind: ComponentKind) -> &'static ComponentThemeDefaults {
    static BASE: Lazy<ComponentThemeDefaults> = Lazy::new(ComponentThemeDefaults::default);
    STANDARD_DEFAULTS.get(&kind).unwrap_or(&*BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Shade;

    #[test]
    fn test_standard_builds() {
        assert!(builder().build().is_ok());
    }

    #[test]
    fn test_every_kind_has_defaults() {
        for kind in ComponentKind::ALL {
            assert!(STANDARD_DEFAULTS.contains_key(kind), "missing {kind}");
        }
    }

    #[test]
    fn test_standard_roles_resolve_to_literals() {
        let theme = registry();
        for (role, _, _) in STANDARD_ROLES {
            for shade in Shade::ALL {
                let value = theme.resolve_color(role, *shade);
                assert!(
                    crate::palette::is_color_literal(&value),
                    "{role}/{shade} resolved to {value}"
                );
            }
        }
    }

    #[test]
    fn test_primary_is_blue_800() {
        assert_eq!(registry().resolve_color("primary", Shade::Light), "#1565C0");
    }
}
