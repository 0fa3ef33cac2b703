//! The navigation header.

use serde::Serialize;

use crate::animation::lerp;
use crate::layout::{place_in_rooms, RoomChild, Rooms};
use crate::props::{ComponentKind, Overlay, Platform, Shade, Size};
use crate::style::{groups, merge, StyleTree};
use crate::typography::font_family;
use crate::util::truncate_to_width;

use super::{drop_shadow, Animate, StyleContext};

pub const NAVIGATION_HEIGHT: f64 = 56.0;
pub const OVERSIZED_NAVIGATION_HEIGHT: f64 = 148.0;
pub const FROSTED_BLUR_AMOUNT: u32 = 10;

const ELEVATION: f64 = 4.0;

/// Height reserved above the navigation bar for the system status bar.
pub fn status_bar_height(platform: Platform) -> f64 {
    match platform {
        Platform::Ios => 20.0,
        Platform::Android => 24.0,
    }
}

/// How the renderer should paint behind the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Surface {
    /// Background color only.
    Flat,
    /// A blur view of the given tint under a transparent background.
    Blur { shade: Shade, amount: u32 },
}

/// Navigation bar geometry at a minimization progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderMotion {
    pub height: f64,
    pub opacity: f64,
    pub offset: f64,
}

impl HeaderMotion {
    /// Interpolates between expanded (`progress` 0) and minimized (1).
    ///
    /// Non-finite progress is treated as expanded.
    pub fn at(progress: f64, full_height: f64) -> Self {
        let p = clamp_progress(progress);
        Self {
            height: lerp(full_height, 0.0, p),
            opacity: lerp(1.0, 0.0, p),
            offset: lerp(0.0, -full_height, p),
        }
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn height_for(oversized: bool) -> f64 {
    if oversized {
        OVERSIZED_NAVIGATION_HEIGHT
    } else {
        NAVIGATION_HEIGHT
    }
}

/// A header configuration.
///
/// Callbacks are handed to a [`HeaderController`](super::HeaderController)
/// when one is built from the header.
pub struct Header {
    shade: Option<Shade>,
    overlay: Option<Overlay>,
    color: Option<String>,
    label_color: Option<String>,
    oversized: Option<bool>,
    minimized_initially: bool,
    drop_shadow: Option<bool>,
    label: String,
    label_max_width: Option<usize>,
    id: Option<String>,
    children: Vec<RoomChild>,
    pub(super) on_minimized: Option<Box<dyn FnMut()>>,
    pub(super) on_maximized: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("shade", &self.shade)
            .field("overlay", &self.overlay)
            .field("color", &self.color)
            .field("label_color", &self.label_color)
            .field("oversized", &self.oversized)
            .field("minimized_initially", &self.minimized_initially)
            .field("drop_shadow", &self.drop_shadow)
            .field("label", &self.label)
            .field("label_max_width", &self.label_max_width)
            .field("id", &self.id)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Output of [`Header::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHeader {
    pub style: StyleTree,
    pub surface: Surface,
    /// Label text after truncation.
    pub label: String,
    pub rooms: Rooms,
    pub minimized: bool,
    pub progress: f64,
}

impl Header {
    pub fn new(label: &str) -> Self {
        Self {
            shade: None,
            overlay: None,
            color: None,
            label_color: None,
            oversized: None,
            minimized_initially: false,
            drop_shadow: None,
            label: label.to_string(),
            label_max_width: None,
            id: None,
            children: Vec::new(),
            on_minimized: None,
            on_maximized: None,
        }
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn color(mut self, token: &str) -> Self {
        self.color = Some(token.to_string());
        self
    }

    pub fn label_color(mut self, token: &str) -> Self {
        self.label_color = Some(token.to_string());
        self
    }

    pub fn oversized(mut self, oversized: bool) -> Self {
        self.oversized = Some(oversized);
        self
    }

    /// Starts minimized, without animating or firing callbacks.
    pub fn minimized_initially(mut self, minimized: bool) -> Self {
        self.minimized_initially = minimized;
        self
    }

    pub fn drop_shadow(mut self, on: bool) -> Self {
        self.drop_shadow = Some(on);
        self
    }

    /// Caps the label at this many display columns.
    pub fn label_max_width(mut self, columns: usize) -> Self {
        self.label_max_width = Some(columns);
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn child(mut self, child: RoomChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = RoomChild>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_minimized<F: FnMut() + 'static>(mut self, handler: F) -> Self {
        self.on_minimized = Some(Box::new(handler));
        self
    }

    pub fn on_maximized<F: FnMut() + 'static>(mut self, handler: F) -> Self {
        self.on_maximized = Some(Box::new(handler));
        self
    }

    pub fn is_minimized_initially(&self) -> bool {
        self.minimized_initially
    }

    /// Full navigation height for the theme and size flags.
    pub fn navigation_height(&self, ctx: &StyleContext<'_>) -> f64 {
        let defaults = ctx.theme.defaults_for(ComponentKind::Header);
        height_for(self.oversized.unwrap_or(defaults.oversized))
    }

    /// Resolves the header at rest.
    pub fn resolve(&self, ctx: &StyleContext<'_>, overrides: Option<&StyleTree>) -> ResolvedHeader {
        let progress = if self.minimized_initially { 1.0 } else { 0.0 };
        self.resolve_at(ctx, progress, overrides)
    }

    /// Resolves the header at a minimization progress between 0 and 1.
    ///
    /// Progress outside that range is clamped; NaN resolves expanded.
    pub fn resolve_at(&self, ctx: &StyleContext<'_>, progress: f64, overrides: Option<&StyleTree>) -> ResolvedHeader {
        let theme = ctx.theme;
        let defaults = theme.defaults_for(ComponentKind::Header);
        let shade = ctx.shade_for(self.shade, defaults);
        let overlay = self.overlay.unwrap_or(defaults.overlay);
        let oversized = self.oversized.unwrap_or(defaults.oversized);

        let progress = clamp_progress(progress);
        let minimized = progress >= 1.0;
        let status_bar = status_bar_height(ctx.platform);
        let motion = HeaderMotion::at(progress, height_for(oversized));

        let color = theme.resolve_color(self.color.as_deref().unwrap_or(&defaults.color), shade);
        let label_color =
            theme.resolve_color(self.label_color.as_deref().unwrap_or(&defaults.label_color), shade);

        let (background, surface) = match overlay {
            Overlay::Opaque => (color, Surface::Flat),
            Overlay::Transparent => ("transparent".to_string(), Surface::Flat),
            Overlay::TranslucentClear => (theme.with_opacity(&color, "translucent"), Surface::Flat),
            Overlay::TranslucentFrosted => (
                "transparent".to_string(),
                Surface::Blur {
                    shade,
                    amount: FROSTED_BLUR_AMOUNT,
                },
            ),
        };

        let mut style = StyleTree::new();

        let container = style.group_mut(groups::CONTAINER);
        container.set("height", status_bar + motion.height);
        container.set("paddingTop", status_bar);
        container.set("backgroundColor", background);
        if self.drop_shadow.unwrap_or(defaults.drop_shadow) && !minimized {
            container.apply(&drop_shadow(ctx, shade, ELEVATION));
        }

        let navigation = style.group_mut(groups::NAVIGATION);
        navigation.set("height", motion.height);
        navigation.set("opacity", motion.opacity);
        navigation.set("translateY", motion.offset);
        navigation.set("flexDirection", "row");
        navigation.set("alignItems", if oversized { "flex-end" } else { "center" });

        let label = style.group_mut(groups::LABEL);
        let size = if oversized { Size::Large } else { defaults.size };
        theme.fonts().record(defaults.weight, size).apply_to(label);
        label.set("fontFamily", font_family(ctx.platform));
        label.set("color", label_color);
        label.set(
            "textAlign",
            match ctx.platform {
                Platform::Ios => "center",
                Platform::Android => "left",
            },
        );

        let text = match self.label_max_width {
            Some(columns) => truncate_to_width(&self.label, columns),
            None => self.label.clone(),
        };

        ResolvedHeader {
            style: merge(style, overrides),
            surface,
            label: text,
            rooms: place_in_rooms(&self.children),
            minimized,
            progress,
        }
    }
}

impl Animate for Header {
    fn animation_track(&self) -> String {
        let id = self.id.as_deref().unwrap_or(ComponentKind::Header.as_str());
        format!("{id}:minimize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RoomContent;
    use crate::style::StyleValue;
    use crate::theme::ThemeRegistry;

    fn text<'a>(resolved: &'a ResolvedHeader, group: &str, key: &str) -> Option<&'a str> {
        resolved.style.get(group, key).and_then(StyleValue::as_text)
    }

    fn number(resolved: &ResolvedHeader, group: &str, key: &str) -> Option<f64> {
        resolved.style.get(group, key).and_then(StyleValue::as_number)
    }

    #[test]
    fn test_overlay_modes() {
        let ctx = StyleContext::standard();
        let header = |overlay| Header::new("Inbox").color("#1565C0").overlay(overlay).resolve(&ctx, None);

        let opaque = header(Overlay::Opaque);
        assert_eq!(text(&opaque, "container", "backgroundColor"), Some("#1565C0"));
        assert_eq!(opaque.surface, Surface::Flat);

        let transparent = header(Overlay::Transparent);
        assert_eq!(text(&transparent, "container", "backgroundColor"), Some("transparent"));

        let clear = header(Overlay::TranslucentClear);
        assert_eq!(text(&clear, "container", "backgroundColor"), Some("#1565C0dd"));

        let frosted = header(Overlay::TranslucentFrosted);
        assert_eq!(text(&frosted, "container", "backgroundColor"), Some("transparent"));
        assert_eq!(
            frosted.surface,
            Surface::Blur {
                shade: Shade::Light,
                amount: FROSTED_BLUR_AMOUNT
            }
        );
    }

    #[test]
    fn test_frosted_blur_follows_shade() {
        let ctx = StyleContext::standard();
        let resolved = Header::new("x")
            .overlay(Overlay::TranslucentFrosted)
            .shade(Shade::Dark)
            .resolve(&ctx, None);
        assert_eq!(resolved.surface, Surface::Blur { shade: Shade::Dark, amount: 10 });
    }

    #[test]
    fn test_heights_per_platform() {
        let ios = StyleContext::standard().platform(Platform::Ios);
        let resolved = Header::new("x").resolve(&ios, None);
        assert_eq!(number(&resolved, "container", "height"), Some(76.0));
        assert_eq!(number(&resolved, "navigation", "height"), Some(56.0));

        let android = StyleContext::standard().platform(Platform::Android);
        let resolved = Header::new("x").oversized(true).resolve(&android, None);
        assert_eq!(number(&resolved, "container", "height"), Some(172.0));
        assert_eq!(number(&resolved, "label", "fontSize"), Some(24.0));
    }

    #[test]
    fn test_motion_interpolates() {
        let motion = HeaderMotion::at(0.5, 56.0);
        assert_eq!(motion.height, 28.0);
        assert_eq!(motion.opacity, 0.5);
        assert_eq!(motion.offset, -28.0);

        let done = HeaderMotion::at(2.0, 56.0);
        assert_eq!(done.height, 0.0);
        assert_eq!(done.offset, -56.0);
    }

    #[test]
    fn test_non_finite_progress_resolves_expanded() {
        let motion = HeaderMotion::at(f64::NAN, 56.0);
        assert_eq!(motion, HeaderMotion { height: 56.0, opacity: 1.0, offset: 0.0 });

        let ctx = StyleContext::standard();
        for progress in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let resolved = Header::new("x").resolve_at(&ctx, progress, None);
            assert_eq!(resolved.progress, 0.0);
            assert!(!resolved.minimized);
            for key in ["height", "opacity", "translateY"] {
                let value = number(&resolved, "navigation", key);
                assert!(value.is_some_and(f64::is_finite), "{key} = {value:?}");
            }
        }
    }

    #[test]
    fn test_oversized_from_theme_defaults() {
        let theme = ThemeRegistry::standard_builder()
            .update_component(ComponentKind::Header, |d| d.oversized = true)
            .build()
            .unwrap();
        let ctx = StyleContext::new(&theme);
        let header = Header::new("x");
        let resolved = header.resolve(&ctx, None);
        assert_eq!(header.navigation_height(&ctx), OVERSIZED_NAVIGATION_HEIGHT);
        assert_eq!(number(&resolved, "navigation", "height"), Some(OVERSIZED_NAVIGATION_HEIGHT));

        let resolved = header.oversized(false).resolve(&ctx, None);
        assert_eq!(number(&resolved, "navigation", "height"), Some(NAVIGATION_HEIGHT));
    }

    #[test]
    fn test_shadow_dropped_when_minimized() {
        let ctx = StyleContext::standard().platform(Platform::Android);
        let expanded = Header::new("x").drop_shadow(true).resolve_at(&ctx, 0.5, None);
        assert_eq!(number(&expanded, "container", "elevation"), Some(4.0));

        let minimized = Header::new("x").drop_shadow(true).resolve_at(&ctx, 1.0, None);
        assert!(minimized.minimized);
        assert!(number(&minimized, "container", "elevation").is_none());

        let off = Header::new("x").drop_shadow(false).resolve(&ctx, None);
        assert!(number(&off, "container", "elevation").is_none());
    }

    #[test]
    fn test_minimized_initially_resolves_collapsed() {
        let ctx = StyleContext::standard();
        let resolved = Header::new("x").minimized_initially(true).resolve(&ctx, None);
        assert!(resolved.minimized);
        assert_eq!(number(&resolved, "navigation", "height"), Some(0.0));
    }

    #[test]
    fn test_label_alignment_and_truncation() {
        let ios = StyleContext::standard().platform(Platform::Ios);
        let resolved = Header::new("Notifications").label_max_width(6).resolve(&ios, None);
        assert_eq!(resolved.label, "Notif…");
        assert_eq!(text(&resolved, "label", "textAlign"), Some("center"));

        let android = StyleContext::standard().platform(Platform::Android);
        let resolved = Header::new("Notifications").resolve(&android, None);
        assert_eq!(resolved.label, "Notifications");
        assert_eq!(text(&resolved, "label", "textAlign"), Some("left"));
    }

    #[test]
    fn test_label_color_default() {
        let ctx = StyleContext::standard();
        let resolved = Header::new("x").resolve(&ctx, None);
        let expected = ThemeRegistry::standard().resolve_color("on-primary", Shade::Light);
        assert_eq!(text(&resolved, "label", "color"), Some(expected.as_str()));
    }

    #[test]
    fn test_rooms_from_children() {
        let ctx = StyleContext::standard();
        let resolved = Header::new("x")
            .child(RoomChild::new("menu", "header-left"))
            .child(RoomChild::untagged("stray"))
            .resolve(&ctx, None);
        assert_eq!(resolved.rooms.left, RoomContent::Filled(vec!["menu".to_string()]));
        assert!(resolved.rooms.center.is_filler());
    }

    #[test]
    fn test_track_name() {
        assert_eq!(Header::new("x").animation_track(), "header:minimize");
        assert_eq!(Header::new("x").id("main").animation_track(), "main:minimize");
    }
}
