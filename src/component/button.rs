//! Raised and flat buttons.

use serde::Serialize;

use crate::props::{ComponentKind, Shade, Shape, Size};
use crate::style::{groups, merge, StyleGroup, StyleTree};
use crate::theme::IconPreset;
use crate::typography::font_family;

use super::{drop_shadow, icon_dimension, Animate, StyleContext};

const HEIGHT: f64 = 36.0;
const MIN_WIDTH: f64 = 88.0;
const ELEVATION: f64 = 2.0;

/// A button configuration.
///
/// # Example
///
/// ```rust
/// use livery::{Button, StyleContext};
///
/// let ctx = StyleContext::standard();
/// let resolved = Button::raised("Save").color("#FF5722").resolve(&ctx, None);
///
/// assert_eq!(
///     resolved.style.get("container", "backgroundColor").and_then(|v| v.as_text()),
///     Some("#FF5722"),
/// );
/// ```
pub struct Button {
    kind: ComponentKind,
    label: String,
    shade: Option<Shade>,
    shape: Shape,
    disabled: bool,
    busy: bool,
    color: Option<String>,
    label_color: Option<String>,
    icon_color: Option<String>,
    icon_preset: Option<String>,
    icon_size: Option<Size>,
    id: Option<String>,
    on_press: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("shade", &self.shade)
            .field("shape", &self.shape)
            .field("disabled", &self.disabled)
            .field("busy", &self.busy)
            .field("color", &self.color)
            .field("label_color", &self.label_color)
            .field("icon_color", &self.icon_color)
            .field("icon_preset", &self.icon_preset)
            .field("icon_size", &self.icon_size)
            .field("id", &self.id)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

/// Output of [`Button::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedButton {
    pub style: StyleTree,
    pub label: String,
    /// The icon to draw, if a known preset was requested.
    pub icon: Option<IconPreset>,
    /// Whether an activity indicator replaces the label.
    pub busy: bool,
    /// Whether presses are accepted.
    pub interactive: bool,
}

impl Button {
    fn new(kind: ComponentKind, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            shade: None,
            shape: Shape::default(),
            disabled: false,
            busy: false,
            color: None,
            label_color: None,
            icon_color: None,
            icon_preset: None,
            icon_size: None,
            id: None,
            on_press: None,
        }
    }

    /// A filled button with a drop shadow.
    pub fn raised(label: &str) -> Self {
        Self::new(ComponentKind::ButtonRaised, label)
    }

    /// A text-only button on a transparent background.
    pub fn flat(label: &str) -> Self {
        Self::new(ComponentKind::ButtonFlat, label)
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Color token: a theme role or a literal color.
    pub fn color(mut self, token: &str) -> Self {
        self.color = Some(token.to_string());
        self
    }

    pub fn label_color(mut self, token: &str) -> Self {
        self.label_color = Some(token.to_string());
        self
    }

    pub fn icon_color(mut self, token: &str) -> Self {
        self.icon_color = Some(token.to_string());
        self
    }

    pub fn icon(mut self, preset: &str) -> Self {
        self.icon_preset = Some(preset.to_string());
        self
    }

    pub fn icon_size(mut self, size: Size) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn on_press<F: FnMut() + 'static>(mut self, handler: F) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Whether the button currently accepts presses.
    pub fn is_interactive(&self) -> bool {
        !(self.disabled || self.busy)
    }

    /// Delivers a press to the handler.
    ///
    /// Returns false if the press was ignored because the button is disabled
    /// or busy, or has no handler.
    pub fn press(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        match self.on_press.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Resolves the final style tree.
    pub fn resolve(&self, ctx: &StyleContext<'_>, overrides: Option<&StyleTree>) -> ResolvedButton {
        let theme = ctx.theme;
        let defaults = theme.defaults_for(self.kind);
        let shade = ctx.shade_for(self.shade, defaults);
        let raised = self.kind == ComponentKind::ButtonRaised;
        let inactive = !self.is_interactive();

        let color_token = self.color.as_deref().unwrap_or(&defaults.color);
        let label_token = match (&self.label_color, raised) {
            (Some(token), _) => token.as_str(),
            // Flat buttons draw their color in the label
            (None, false) if self.color.is_some() => color_token,
            (None, _) => defaults.label_color.as_str(),
        };

        let (color, label_color) = if inactive {
            let disabled = theme.resolve_color("disabled", shade);
            let label = if raised {
                theme.resolve_color("disabled-text", shade)
            } else {
                disabled.clone()
            };
            (disabled, label)
        } else {
            (
                theme.resolve_color(color_token, shade),
                theme.resolve_color(label_token, shade),
            )
        };

        let mut style = StyleTree::new().with_group(groups::CONTAINER, container_template(self.shape));

        let container = style.group_mut(groups::CONTAINER);
        if raised {
            container.set("backgroundColor", color.as_str());
            if defaults.drop_shadow && !inactive {
                container.apply(&drop_shadow(ctx, shade, ELEVATION));
            }
        } else {
            container.set("backgroundColor", "transparent");
        }

        let label = style.group_mut(groups::LABEL);
        theme.fonts().record(defaults.weight, defaults.size).apply_to(label);
        label.set("fontFamily", font_family(ctx.platform));
        label.set("color", label_color.as_str());
        label.set("textAlign", "center");

        if defaults.rippled && !inactive {
            style.set(
                groups::RIPPLE,
                "color",
                theme.with_opacity(&label_color, "ripple"),
            );
        }

        let icon_size = self.icon_size.unwrap_or(defaults.size);
        let icon = self
            .icon_preset
            .as_deref()
            .and_then(|name| theme.icon(name))
            .cloned();

        if let Some(preset) = &icon {
            let icon_color = match (&self.icon_color, inactive) {
                (_, true) => label_color.clone(),
                (Some(token), false) => theme.resolve_color(token, shade),
                (None, false) => label_color.clone(),
            };
            let edge = icon_dimension(icon_size);
            let group = style.group_mut(groups::ICON);
            group.set("width", edge);
            group.set("height", edge);
            group.set("fontSize", edge);
            group.set("fontFamily", preset.family.as_str());
            group.set("color", icon_color);
            if !self.label.is_empty() {
                group.set("marginRight", 8);
            }
        }

        if self.busy {
            style.set(groups::LABEL, "opacity", 0);
            let status = style.group_mut(groups::STATUS);
            status.set("display", "flex");
            status.set("color", label_color.as_str());
            status.set("size", icon_dimension(icon_size));
        }

        ResolvedButton {
            style: merge(style, overrides),
            label: self.label.clone(),
            icon,
            busy: self.busy,
            interactive: !inactive,
        }
    }
}

impl Animate for Button {
    fn animation_track(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("{}:{}", self.kind, self.label))
    }
}

fn container_template(shape: Shape) -> StyleGroup {
    let radius = match shape {
        Shape::Square => 2.0,
        Shape::Round => HEIGHT / 2.0,
    };
    StyleGroup::new()
        .with("height", HEIGHT)
        .with("minWidth", MIN_WIDTH)
        .with("paddingHorizontal", 16)
        .with("borderRadius", radius)
        .with("flexDirection", "row")
        .with("alignItems", "center")
        .with("justifyContent", "center")
}
