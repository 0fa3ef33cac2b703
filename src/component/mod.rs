//! Component configurations and their style resolvers.
//!
//! Each component is a typed configuration with builder methods. Options a
//! caller leaves unset fall back to the theme's defaults for the component
//! kind. Resolution is a pure function of the configuration, a
//! [`StyleContext`] and an optional override, applied in this order (later
//! wins):
//!
//! 1. Built-in template for the component and size
//! 2. Theme defaults for the component kind
//! 3. State-dependent changes (disabled, busy, focused, minimized)
//! 4. Explicit options set on the instance
//! 5. The caller's override tree, merged one level deep
//!
//! Disabled and busy are the exception to step 4: they redirect color
//! resolution to the theme's `disabled` role no matter what color the
//! instance asked for.

mod button;
mod field;
mod header;
mod minimize;
mod text;

pub use button::{Button, ResolvedButton};
pub use field::{ResolvedField, TextField};
pub use header::{
    status_bar_height, Header, HeaderMotion, ResolvedHeader, Surface, FROSTED_BLUR_AMOUNT,
    NAVIGATION_HEIGHT, OVERSIZED_NAVIGATION_HEIGHT,
};
pub use minimize::{HeaderController, Minimization, MINIMIZE_DURATION_MS};
pub use text::{ResolvedText, Text};

use crate::animation::{AnimationCommand, AnimationId, Animator};
use crate::props::{Platform, Shade, Size};
use crate::style::StyleGroup;
use crate::theme::{detect_shade, ComponentThemeDefaults, ThemeRegistry};

/// Everything besides the component itself that resolution depends on.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub theme: &'a ThemeRegistry,
    pub platform: Platform,
    /// App-wide shade; sits above theme defaults and below explicit options.
    pub shade: Option<Shade>,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a ThemeRegistry) -> Self {
        Self {
            theme,
            platform: Platform::default(),
            shade: None,
        }
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    /// Uses the operating system's light/dark preference as the app shade.
    pub fn system_shade(mut self) -> Self {
        self.shade = Some(detect_shade());
        self
    }

    pub(crate) fn shade_for(&self, explicit: Option<Shade>, defaults: &ComponentThemeDefaults) -> Shade {
        explicit.or(self.shade).unwrap_or(defaults.shade)
    }
}

impl StyleContext<'static> {
    /// A context over the built-in theme.
    pub fn standard() -> Self {
        Self::new(ThemeRegistry::standard())
    }
}

/// Imperative animation entry point shared by every component.
pub trait Animate {
    /// The track name animations for this instance run on.
    fn animation_track(&self) -> String;

    /// Submits an animation for this instance.
    fn animate(&self, animator: &mut dyn Animator, command: AnimationCommand) -> AnimationId {
        animator.submit(&self.animation_track(), command)
    }
}

/// Drop shadow properties for the platform.
///
/// iOS draws shadows from explicit shadow properties; Android only takes an
/// elevation.
pub(crate) fn drop_shadow(ctx: &StyleContext<'_>, shade: Shade, elevation: f64) -> StyleGroup {
    match ctx.platform {
        Platform::Ios => StyleGroup::new()
            .with("shadowColor", ctx.theme.resolve_color("shadow", shade))
            .with("shadowOpacity", 0.26)
            .with("shadowRadius", elevation)
            .with("shadowOffsetX", 0)
            .with("shadowOffsetY", elevation / 2.0),
        Platform::Android => StyleGroup::new().with("elevation", elevation),
    }
}

/// Icon and activity-indicator edge length for a size.
pub(crate) fn icon_dimension(size: Size) -> f64 {
    match size {
        Size::Small => 16.0,
        Size::Normal => 24.0,
        Size::Large => 32.0,
    }
}
