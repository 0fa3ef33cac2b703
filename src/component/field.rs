//! Single-line text input with a floating label and helper line.

use serde::Serialize;

use crate::props::{ComponentKind, Shade, Size, Weight};
use crate::style::{groups, merge, StyleTree};
use crate::typography::font_family;

use super::{Animate, StyleContext};

/// A text field configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    shade: Option<Shade>,
    color: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    size: Option<Size>,
    disabled: bool,
    focused: bool,
    error: Option<String>,
    id: Option<String>,
}

/// Output of [`TextField::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    pub style: StyleTree,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// Helper line content; set only when the field has an error.
    pub helper: Option<String>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    /// Accent color used while focused.
    pub fn color(mut self, token: &str) -> Self {
        self.color = Some(token.to_string());
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Puts the field in the error state with a helper message.
    pub fn error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn resolve(&self, ctx: &StyleContext<'_>, overrides: Option<&StyleTree>) -> ResolvedField {
        let theme = ctx.theme;
        let defaults = theme.defaults_for(ComponentKind::FieldText);
        let shade = ctx.shade_for(self.shade, defaults);
        let family = font_family(ctx.platform);

        let accent = self.color.as_deref().unwrap_or(&defaults.color);
        let focused = self.focused && !self.disabled;

        let border = if self.disabled {
            "disabled"
        } else if self.error.is_some() {
            "error"
        } else if focused {
            accent
        } else {
            "divider"
        };
        let label_token = if self.disabled {
            "disabled"
        } else if self.error.is_some() {
            "error"
        } else if focused {
            accent
        } else {
            defaults.label_color.as_str()
        };
        let input_token = if self.disabled { "disabled" } else { "text" };

        let mut style = StyleTree::new();

        let container = style.group_mut(groups::CONTAINER);
        container.set("borderBottomWidth", if focused { 2 } else { 1 });
        container.set("borderBottomColor", theme.resolve_color(border, shade));
        container.set("paddingVertical", 8);

        let caption = theme.fonts().record(Weight::Normal, Size::Small);

        let input = style.group_mut(groups::INPUT);
        theme
            .fonts()
            .record(defaults.weight, self.size.unwrap_or(defaults.size))
            .apply_to(input);
        input.set("fontFamily", family);
        input.set("color", theme.resolve_color(input_token, shade));
        input.set("placeholderColor", theme.resolve_color("muted", shade));

        let label = style.group_mut(groups::LABEL);
        caption.apply_to(label);
        label.set("fontFamily", family);
        label.set("color", theme.resolve_color(label_token, shade));

        if self.error.is_some() {
            let status = style.group_mut(groups::STATUS);
            caption.apply_to(status);
            status.set("fontFamily", family);
            status.set("color", theme.resolve_color("error", shade));
        }

        ResolvedField {
            style: merge(style, overrides),
            label: self.label.clone(),
            placeholder: self.placeholder.clone(),
            helper: self.error.clone(),
        }
    }
}

impl Animate for TextField {
    fn animation_track(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("{}:{}", ComponentKind::FieldText, self.label.as_deref().unwrap_or_default()))
    }
}
