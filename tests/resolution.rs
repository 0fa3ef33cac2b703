//! End-to-end resolution behavior over the built-in theme.

use livery::{
    merge, AnimationCommand, Animator, Button, Header, HeaderController, Overlay, Platform, Shade,
    StyleContext, StyleTree, StyleValue, Surface, Text, TextField, ThemeRegistry, Timeline,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn text(tree: &StyleTree, group: &str, key: &str) -> Option<String> {
    tree.get(group, key).and_then(StyleValue::as_text).map(str::to_string)
}

#[test]
fn test_known_roles_resolve_per_shade() {
    let theme = ThemeRegistry::standard();
    assert_eq!(theme.resolve_color("primary", Shade::Light), "#1565C0");
    assert_eq!(theme.resolve_color("primary", Shade::Dark), "#64B5F6");
    assert_eq!(theme.resolve_color("error", Shade::Light), "#D32F2F");
}

#[test]
fn test_disabled_button_ignores_color_in_both_shades() {
    let theme = ThemeRegistry::standard();
    for shade in [Shade::Light, Shade::Dark] {
        let ctx = StyleContext::new(theme).shade(shade);
        for color in ["accent", "#00FF00", "mystery-hex"] {
            let resolved = Button::raised("OK").color(color).disabled(true).resolve(&ctx, None);
            assert_eq!(
                text(&resolved.style, "container", "backgroundColor"),
                Some(theme.resolve_color("disabled", shade))
            );
        }
    }
}

#[test]
fn test_bare_theme_resolves_concrete_state_colors() {
    let theme = ThemeRegistry::builder().build().unwrap();
    let ctx = StyleContext::new(&theme);

    let button = Button::raised("OK").disabled(true).resolve(&ctx, None);
    let field = TextField::new().resolve(&ctx, None);
    let builtin = ThemeRegistry::standard();

    assert_eq!(
        text(&button.style, "container", "backgroundColor"),
        Some(builtin.resolve_color("disabled", Shade::Light))
    );
    assert_eq!(
        text(&button.style, "label", "color"),
        Some(builtin.resolve_color("disabled-text", Shade::Light))
    );
    assert_eq!(
        text(&field.style, "container", "borderBottomColor"),
        Some(builtin.resolve_color("divider", Shade::Light))
    );
}

#[test]
fn test_mystery_color_passes_through() {
    let ctx = StyleContext::standard();
    let resolved = Button::raised("OK").color("mystery-hex").resolve(&ctx, None);
    assert_eq!(text(&resolved.style, "container", "backgroundColor").as_deref(), Some("mystery-hex"));
}

#[test]
fn test_translucent_clear_concatenates_suffix() {
    let ctx = StyleContext::standard();
    let resolved = Header::new("Inbox")
        .overlay(Overlay::TranslucentClear)
        .resolve(&ctx, None);
    assert_eq!(text(&resolved.style, "container", "backgroundColor").as_deref(), Some("#1565C0dd"));
}

#[test]
fn test_frosted_header_is_transparent_over_blur() {
    let ctx = StyleContext::standard().shade(Shade::Dark);
    let resolved = Header::new("Inbox")
        .overlay(Overlay::TranslucentFrosted)
        .resolve(&ctx, None);
    assert_eq!(text(&resolved.style, "container", "backgroundColor").as_deref(), Some("transparent"));
    assert!(matches!(resolved.surface, Surface::Blur { shade: Shade::Dark, .. }));
}

#[test]
fn test_opaque_header_navigation_height() {
    for platform in [Platform::Ios, Platform::Android] {
        let ctx = StyleContext::standard().platform(platform);
        let resolved = Header::new("Inbox").overlay(Overlay::Opaque).resolve(&ctx, None);
        assert_eq!(resolved.style.get("navigation", "height"), Some(&StyleValue::Number(56.0)));
    }
}

#[test]
fn test_one_level_merge_example() {
    let resolved = StyleTree::new().with("container", "a", 1).with("container", "b", 2);
    let overrides = StyleTree::new().with("container", "b", 9);
    let expected = StyleTree::new().with("container", "a", 1).with("container", "b", 9);
    assert_eq!(merge(resolved, Some(&overrides)), expected);
}

#[test]
fn test_override_applies_after_state() {
    let ctx = StyleContext::standard();
    let overrides = StyleTree::new()
        .with("label", "color", "#ABCDEF")
        .with("extra", "flag", true);
    let resolved = TextField::new()
        .disabled(true)
        .resolve(&ctx, Some(&overrides));
    assert_eq!(text(&resolved.style, "label", "color").as_deref(), Some("#ABCDEF"));
    assert_eq!(resolved.style.get("extra", "flag"), Some(&StyleValue::Bool(true)));
    assert!(resolved.style.get("label", "fontSize").is_some());
}

#[test]
fn test_maximize_mid_flight_fires_only_maximized() {
    let minimized = Rc::new(Cell::new(0));
    let maximized = Rc::new(Cell::new(0));
    let (m, x) = (Rc::clone(&minimized), Rc::clone(&maximized));

    let mut timeline = Timeline::new();
    let mut controller = HeaderController::new(
        Header::new("Inbox")
            .on_minimized(move || m.set(m.get() + 1))
            .on_maximized(move || x.set(x.get() + 1)),
    );

    controller.minimize(&mut timeline);
    for id in timeline.advance(120) {
        controller.finish(id);
    }
    controller.maximize(&mut timeline);
    for id in timeline.advance(1_000) {
        controller.finish(id);
    }

    assert!(!controller.is_minimized());
    assert_eq!(minimized.get(), 0);
    assert_eq!(maximized.get(), 1);
}

#[test]
fn test_components_share_animate_entry_point() {
    use livery::Animate;

    let mut timeline = Timeline::new();
    let text = Text::title("Hello").id("title");
    let id = text.animate(&mut timeline, AnimationCommand::to(1.0).from(0.0).duration_ms(10));
    assert_eq!(timeline.advance(10), vec![id]);
    assert_eq!(timeline.value("title"), Some(1.0));
}

fn group_strategy() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(("[a-d]", any::<i32>()), 0..6)
}

fn tree_from(groups: &[(String, Vec<(String, i32)>)]) -> StyleTree {
    let mut tree = StyleTree::new();
    for (group, entries) in groups {
        let g = tree.group_mut(group);
        for (key, value) in entries {
            g.set(key, *value);
        }
    }
    tree
}

proptest! {
    #[test]
    fn unknown_tokens_pass_through(token in "[a-z#][a-z0-9-]{0,16}", dark in any::<bool>()) {
        let theme = ThemeRegistry::standard();
        prop_assume!(!theme.is_role(&token));
        let shade = if dark { Shade::Dark } else { Shade::Light };
        prop_assert_eq!(theme.resolve_color(&token, shade), token);
    }

    #[test]
    fn merge_is_one_level(
        base in prop::collection::vec(("[x-z]", group_strategy()), 0..4),
        over in prop::collection::vec(("[x-z]", group_strategy()), 0..4),
    ) {
        let resolved = tree_from(&base);
        let overrides = tree_from(&over);
        let merged = merge(resolved.clone(), Some(&overrides));

        for (name, group) in merged.groups() {
            for (key, value) in group.iter() {
                let expected = overrides
                    .get(name, key)
                    .or_else(|| resolved.get(name, key));
                prop_assert_eq!(Some(value), expected);
            }
        }
        for (name, group) in resolved.groups().chain(overrides.groups()) {
            for (key, _) in group.iter() {
                prop_assert!(merged.get(name, key).is_some());
            }
        }
    }

    #[test]
    fn merge_without_override_is_identity(base in prop::collection::vec(("[x-z]", group_strategy()), 0..4)) {
        let resolved = tree_from(&base);
        prop_assert_eq!(merge(resolved.clone(), None), resolved);
    }
}
