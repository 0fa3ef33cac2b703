//! Loading themes from disk and following the system shade.

use std::io::Write;

use livery::{
    set_shade_detector, Button, ComponentKind, Shade, StyleContext, StyleValue, ThemeError,
    ThemeRegistry,
};
use serial_test::serial;
use tempfile::{Builder, NamedTempFile};

fn theme_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_theme() {
    let file = theme_file(
        ".yaml",
        r##"
palette:
  brand: "#6200EE"
colors:
  primary: { light: "@brand", dark: "#BB86FC" }
components:
  button-raised:
    color: accent
"##,
    );
    let theme = ThemeRegistry::load(file.path()).unwrap();
    assert_eq!(theme.resolve_color("primary", Shade::Light), "#6200EE");
    assert_eq!(theme.resolve_color("primary", Shade::Dark), "#BB86FC");
    assert_eq!(theme.defaults_for(ComponentKind::ButtonRaised).color, "accent");

    let ctx = StyleContext::new(&theme);
    let resolved = Button::raised("OK").resolve(&ctx, None);
    assert_eq!(
        resolved.style.get("container", "backgroundColor").and_then(StyleValue::as_text),
        Some(theme.resolve_color("accent", Shade::Light).as_str())
    );
}

#[test]
fn test_load_json_theme() {
    let file = theme_file(".json", r##"{"colors": {"brand-role": "#123456"}}"##);
    let theme = ThemeRegistry::load(file.path()).unwrap();
    assert_eq!(theme.resolve_color("brand-role", Shade::Dark), "#123456");
    assert!(theme.is_role("primary"));
}

#[test]
fn test_unknown_palette_reference_fails() {
    let file = theme_file(".yml", "colors:\n  primary: \"@nowhere\"\n");
    let err = ThemeRegistry::load(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::UnknownPaletteColor { .. }), "{err}");
}

#[test]
fn test_unsupported_extension() {
    let file = theme_file(".toml", "");
    let err = ThemeRegistry::load(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ThemeRegistry::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
}

#[test]
fn test_malformed_yaml() {
    let file = theme_file(".yaml", "colors: [not, a, map]\n");
    let err = ThemeRegistry::load(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::Parse { format: "YAML", .. }));
}

#[test]
#[serial]
fn test_system_shade_follows_detector() {
    set_shade_detector(|| Shade::Dark);
    let ctx = StyleContext::standard().system_shade();
    assert_eq!(ctx.shade, Some(Shade::Dark));

    let resolved = Button::raised("OK").resolve(&ctx, None);
    assert_eq!(
        resolved.style.get("container", "backgroundColor").and_then(StyleValue::as_text),
        Some("#64B5F6")
    );

    set_shade_detector(|| Shade::Light);
}
