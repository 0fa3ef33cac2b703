//! The theme registry and its builder.

use std::collections::{BTreeMap, HashSet};

use crate::palette::{is_color_literal, is_opacity_suffix, Palette};
use crate::props::{ComponentKind, Shade, Size, Weight};
use crate::typography::{FontTemplate, Typography};

use super::defaults::{ComponentThemeDefaults, IconPreset};
use super::error::ThemeError;
use super::standard;

/// Suffix used when a requested opacity name is unknown.
pub const FALLBACK_OPACITY: &str = "ff";

/// The concrete value of a color role in both shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadePair {
    pub light: String,
    pub dark: String,
}

impl ShadePair {
    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::Light => &self.light,
            Shade::Dark => &self.dark,
        }
    }
}

/// Immutable theme configuration shared by every resolver.
///
/// A registry is built once (see [`ThemeBuilder`] or
/// [`ThemeRegistry::from_yaml_str`]), validated, and only read afterwards.
/// All color roles are stored fully resolved, so lookups never fail.
///
/// # Example
///
/// ```rust
/// use livery::{Shade, ThemeRegistry};
///
/// let theme = ThemeRegistry::standard_builder()
///     .color("brand", "@teal-700", "#80CBC4")
///     .color("cta", "brand", "brand")
///     .build()
///     .unwrap();
///
/// assert_eq!(theme.resolve_color("cta", Shade::Light), "#00796B");
/// assert_eq!(theme.resolve_color("#ABCDEF", Shade::Light), "#ABCDEF");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    palette: Palette,
    colors: BTreeMap<String, ShadePair>,
    components: BTreeMap<ComponentKind, ComponentThemeDefaults>,
    icons: BTreeMap<String, IconPreset>,
    fonts: FontTemplate,
}

impl ThemeRegistry {
    /// Starts an empty theme.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// Starts from the built-in theme content.
    pub fn standard_builder() -> ThemeBuilder {
        standard::builder()
    }

    /// The built-in theme, built on first use and shared read-only.
    pub fn standard() -> &'static ThemeRegistry {
        standard::registry()
    }

    /// Resolves a color token for a shade.
    ///
    /// Known semantic roles return their configured value. Anything else is
    /// treated as a literal color and returned unchanged, which lets callers
    /// use ad-hoc colors without registering them.
    pub fn resolve_color(&self, token: &str, shade: Shade) -> String {
        match self.colors.get(token) {
            Some(pair) => pair.get(shade).to_string(),
            None => {
                tracing::debug!(token, %shade, "color token is not a theme role; using it literally");
                token.to_string()
            }
        }
    }

    /// Returns true if `token` names a semantic color role.
    pub fn is_role(&self, token: &str) -> bool {
        self.colors.contains_key(token)
    }

    /// Returns the resolved values of a color role.
    pub fn role(&self, role: &str) -> Option<&ShadePair> {
        self.colors.get(role)
    }

    /// Iterates role names in order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns the defaults for a component kind.
    ///
    /// Kinds the theme doesn't configure fall back to the built-in defaults.
    pub fn defaults_for(&self, kind: ComponentKind) -> &ComponentThemeDefaults {
        match self.components.get(&kind) {
            Some(defaults) => defaults,
            None => {
                tracing::warn!(%kind, "theme has no defaults for component kind; using built-in");
                standard::defaults_for(kind)
            }
        }
    }

    /// Returns a named opacity suffix, or [`FALLBACK_OPACITY`] if unknown.
    pub fn opacity(&self, name: &str) -> &str {
        match self.palette.opacity(name) {
            Some(suffix) => suffix,
            None => {
                tracing::warn!(opacity = name, "unknown opacity; rendering fully opaque");
                FALLBACK_OPACITY
            }
        }
    }

    /// Appends a named opacity suffix to a concrete color.
    ///
    /// This is plain string concatenation: `"#1565C0"` with `dd` becomes
    /// `"#1565C0dd"`.
    pub fn with_opacity(&self, color: &str, opacity: &str) -> String {
        format!("{}{}", color, self.opacity(opacity))
    }

    /// Looks up an icon preset, logging a warning when it is missing.
    pub fn icon(&self, name: &str) -> Option<&IconPreset> {
        let preset = self.icons.get(name);
        if preset.is_none() {
            tracing::warn!(icon = name, "unknown icon preset; no icon will be rendered");
        }
        preset
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn fonts(&self) -> &FontTemplate {
        &self.fonts
    }
}

/// Builder for [`ThemeRegistry`].
///
/// Color role values take one of three forms:
///
/// - `@name`: a palette color
/// - a literal color (`#RRGGBB`, `rgba(...)`, `transparent`, ...)
/// - another role's name, aliasing it
///
/// Aliases are resolved per shade when [`build`](ThemeBuilder::build) runs;
/// dangling or cyclic aliases are rejected there.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    palette: Palette,
    colors: BTreeMap<String, (String, String)>,
    components: BTreeMap<ComponentKind, ComponentThemeDefaults>,
    icons: BTreeMap<String, IconPreset>,
    fonts: FontTemplate,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBuilder {
    /// Creates a builder with an empty palette and no roles.
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
            colors: BTreeMap::new(),
            components: BTreeMap::new(),
            icons: BTreeMap::new(),
            fonts: FontTemplate::standard(),
        }
    }

    /// Replaces the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Adds or replaces a palette color.
    pub fn palette_color(mut self, name: &str, value: &str) -> Self {
        self.palette.insert_color(name, value);
        self
    }

    /// Adds or replaces a named opacity suffix.
    pub fn opacity(mut self, name: &str, suffix: &str) -> Self {
        self.palette.insert_opacity(name, suffix);
        self
    }

    /// Adds or replaces a color role.
    pub fn color(mut self, role: &str, light: &str, dark: &str) -> Self {
        self.colors
            .insert(role.to_string(), (light.to_string(), dark.to_string()));
        self
    }

    /// Sets the defaults for a component kind.
    pub fn component(mut self, kind: ComponentKind, defaults: ComponentThemeDefaults) -> Self {
        self.components.insert(kind, defaults);
        self
    }

    /// Edits the defaults for a component kind in place.
    ///
    /// Kinds without defaults start from the built-in ones.
    pub fn update_component<F>(mut self, kind: ComponentKind, edit: F) -> Self
    where
        F: FnOnce(&mut ComponentThemeDefaults),
    {
        let defaults = self
            .components
            .entry(kind)
            .or_insert_with(|| standard::defaults_for(kind).clone());
        edit(defaults);
        self
    }

    /// Adds or replaces an icon preset.
    pub fn icon(mut self, name: &str, preset: IconPreset) -> Self {
        self.icons.insert(name.to_string(), preset);
        self
    }

    /// Replaces the font template.
    pub fn fonts(mut self, fonts: FontTemplate) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replaces one typography record.
    pub fn font_record(mut self, weight: Weight, size: Size, record: Typography) -> Self {
        self.fonts = self.fonts.with_record(weight, size, record);
        self
    }

    /// Validates everything and produces the immutable registry.
    ///
    /// Roles the component resolvers depend on (`disabled`, `divider`,
    /// `text`, ...) are filled in from the built-in theme when the builder
    /// doesn't define them.
    ///
    /// # Errors
    ///
    /// Returns an error if a palette color or opacity is malformed, or if a
    /// color role references an unknown palette entry, aliases a missing
    /// role, or takes part in an alias cycle.
    pub fn build(self) -> Result<ThemeRegistry, ThemeError> {
        for (name, value) in self.palette.colors() {
            if !is_color_literal(value) {
                return Err(ThemeError::InvalidPaletteColor {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        for (name, value) in self.palette.opacities() {
            if !is_opacity_suffix(value) {
                return Err(ThemeError::InvalidOpacity {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let mut colors = BTreeMap::new();
        for role in self.colors.keys() {
            let light = self.resolve_role(role, Shade::Light)?;
            let dark = self.resolve_role(role, Shade::Dark)?;
            colors.insert(role.clone(), ShadePair { light, dark });
        }

        for role in standard::REQUIRED_ROLES {
            if colors.contains_key(*role) {
                continue;
            }
            if let Some(pair) = standard::registry().role(role) {
                tracing::warn!(role, "theme does not define a required color role; using built-in");
                colors.insert(role.to_string(), pair.clone());
            }
        }

        Ok(ThemeRegistry {
            palette: self.palette,
            colors,
            components: self.components,
            icons: self.icons,
            fonts: self.fonts,
        })
    }

    fn raw(&self, role: &str, shade: Shade) -> Option<&str> {
        self.colors.get(role).map(|(light, dark)| match shade {
            Shade::Light => light.as_str(),
            Shade::Dark => dark.as_str(),
        })
    }

    fn resolve_role(&self, role: &str, shade: Shade) -> Result<String, ThemeError> {
        let mut visited = HashSet::new();
        let mut path = vec![role.to_string()];
        visited.insert(role.to_string());

        let mut current = role.to_string();
        loop {
            let Some(value) = self.raw(&current, shade) else {
                return Err(ThemeError::UnresolvedAlias {
                    role: role.to_string(),
                    shade,
                    target: current,
                });
            };

            if let Some(name) = value.strip_prefix('@') {
                return self
                    .palette
                    .color(name)
                    .map(str::to_string)
                    .ok_or_else(|| ThemeError::UnknownPaletteColor {
                        role: current.clone(),
                        shade,
                        name: name.to_string(),
                    });
            }

            if self.colors.contains_key(value) {
                if !visited.insert(value.to_string()) {
                    path.push(value.to_string());
                    return Err(ThemeError::CycleDetected { path });
                }
                path.push(value.to_string());
                current = value.to_string();
                continue;
            }

            if is_color_literal(value) {
                return Ok(value.to_string());
            }

            return Err(ThemeError::UnresolvedAlias {
                role: current.clone(),
                shade,
                target: value.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_theme() -> ThemeBuilder {
        ThemeRegistry::builder()
            .palette(Palette::new().with_color("blue", "#1565C0").with_opacity("translucent", "dd"))
            .color("primary", "@blue", "#90CAF9")
            .color("disabled", "rgba(0, 0, 0, 0.26)", "rgba(255, 255, 255, 0.3)")
    }

    #[test]
    fn test_resolve_known_role() {
        let theme = small_theme().build().unwrap();
        assert_eq!(theme.resolve_color("primary", Shade::Light), "#1565C0");
        assert_eq!(theme.resolve_color("primary", Shade::Dark), "#90CAF9");
    }

    #[test]
    fn test_resolve_unknown_passes_through() {
        let theme = small_theme().build().unwrap();
        assert_eq!(theme.resolve_color("mystery-hex", Shade::Light), "mystery-hex");
        assert_eq!(theme.resolve_color("#123456", Shade::Dark), "#123456");
    }

    #[test]
    fn test_alias_chain() {
        let theme = small_theme()
            .color("accent", "primary", "primary")
            .color("link", "accent", "disabled")
            .build()
            .unwrap();
        assert_eq!(theme.resolve_color("link", Shade::Light), "#1565C0");
        assert_eq!(theme.resolve_color("link", Shade::Dark), "rgba(255, 255, 255, 0.3)");
    }

    #[test]
    fn test_unknown_palette_reference() {
        let err = small_theme().color("brand", "@purple", "@blue").build().unwrap_err();
        match err {
            ThemeError::UnknownPaletteColor { role, shade, name } => {
                assert_eq!(role, "brand");
                assert_eq!(shade, Shade::Light);
                assert_eq!(name, "purple");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_alias() {
        let err = small_theme().color("brand", "primary", "missing").build().unwrap_err();
        assert!(matches!(err, ThemeError::UnresolvedAlias { ref target, .. } if target == "missing"));
    }

    #[test]
    fn test_alias_cycle() {
        let err = small_theme()
            .color("a", "b", "#000")
            .color("b", "a", "#000")
            .build()
            .unwrap_err();
        match err {
            ThemeError::CycleDetected { path } => {
                assert_eq!(path.first(), path.last());
                assert_eq!(path.len(), 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_opacity_rejected() {
        let err = small_theme().opacity("ghost", "0.5").build().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidOpacity { .. }));
    }

    #[test]
    fn test_invalid_palette_color_rejected() {
        let err = small_theme().palette_color("weird", "blue-ish").build().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPaletteColor { .. }));
    }

    #[test]
    fn test_with_opacity_concatenates() {
        let theme = small_theme().build().unwrap();
        assert_eq!(theme.with_opacity("#1565C0", "translucent"), "#1565C0dd");
    }

    #[test]
    fn test_unknown_opacity_falls_back() {
        let theme = small_theme().build().unwrap();
        assert_eq!(theme.opacity("nebulous"), FALLBACK_OPACITY);
    }

    #[test]
    fn test_missing_icon_is_none() {
        let theme = small_theme().icon("menu", IconPreset::new("menu")).build().unwrap();
        assert!(theme.icon("menu").is_some());
        assert!(theme.icon("unicorn").is_none());
    }

    #[test]
    fn test_missing_component_defaults_fall_back() {
        let theme = small_theme().build().unwrap();
        let defaults = theme.defaults_for(ComponentKind::Header);
        assert_eq!(defaults, standard::defaults_for(ComponentKind::Header));
    }

    #[test]
    fn test_empty_builder_gets_required_roles() {
        let theme = ThemeRegistry::builder().build().unwrap();
        for role in standard::REQUIRED_ROLES {
            for shade in [Shade::Light, Shade::Dark] {
                let value = theme.resolve_color(role, shade);
                assert!(is_color_literal(&value), "{role} ({shade}) resolved to {value}");
                assert_eq!(value, ThemeRegistry::standard().resolve_color(role, shade));
            }
        }
    }

    #[test]
    fn test_defined_required_role_is_kept() {
        let theme = small_theme().build().unwrap();
        assert_eq!(theme.resolve_color("disabled", Shade::Dark), "rgba(255, 255, 255, 0.3)");
        assert!(theme.is_role("divider"));
    }

    #[test]
    fn test_update_component_starts_from_builtin() {
        let theme = small_theme()
            .update_component(ComponentKind::ButtonRaised, |d| d.color = "accent".to_string())
            .build()
            .unwrap();
        let defaults = theme.defaults_for(ComponentKind::ButtonRaised);
        assert_eq!(defaults.color, "accent");
        assert_eq!(
            defaults.drop_shadow,
            standard::defaults_for(ComponentKind::ButtonRaised).drop_shadow
        );
    }
}
