//! Text in the five typographic roles.

use serde::Serialize;

use crate::props::{Alignment, ComponentKind, Decoration, Shade, Size, Weight};
use crate::style::{groups, merge, StyleTree};
use crate::typography::font_family;

use super::{Animate, StyleContext};

/// A text configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    kind: ComponentKind,
    content: String,
    shade: Option<Shade>,
    color: Option<String>,
    size: Option<Size>,
    weight: Option<Weight>,
    alignment: Alignment,
    decoration: Decoration,
    indentation: f64,
    id: Option<String>,
}

/// Output of [`Text::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedText {
    pub style: StyleTree,
    pub content: String,
}

impl Text {
    fn new(kind: ComponentKind, content: &str) -> Self {
        Self {
            kind,
            content: content.to_string(),
            shade: None,
            color: None,
            size: None,
            weight: None,
            alignment: Alignment::default(),
            decoration: Decoration::default(),
            indentation: 0.0,
            id: None,
        }
    }

    pub fn headline(content: &str) -> Self {
        Self::new(ComponentKind::TextHeadline, content)
    }

    pub fn title(content: &str) -> Self {
        Self::new(ComponentKind::TextTitle, content)
    }

    pub fn subtitle(content: &str) -> Self {
        Self::new(ComponentKind::TextSubtitle, content)
    }

    pub fn paragraph(content: &str) -> Self {
        Self::new(ComponentKind::TextParagraph, content)
    }

    pub fn caption(content: &str) -> Self {
        Self::new(ComponentKind::TextCaption, content)
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }

    pub fn color(mut self, token: &str) -> Self {
        self.color = Some(token.to_string());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Left indentation in points.
    pub fn indentation(mut self, indentation: f64) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn resolve(&self, ctx: &StyleContext<'_>, overrides: Option<&StyleTree>) -> ResolvedText {
        let theme = ctx.theme;
        let defaults = theme.defaults_for(self.kind);
        let shade = ctx.shade_for(self.shade, defaults);

        let weight = self.weight.unwrap_or(defaults.weight);
        let size = self.size.unwrap_or(defaults.size);
        let color = theme.resolve_color(self.color.as_deref().unwrap_or(&defaults.color), shade);

        let mut style = StyleTree::new();
        let label = style.group_mut(groups::LABEL);
        theme.fonts().record(weight, size).apply_to(label);
        label.set("fontFamily", font_family(ctx.platform));
        label.set("color", color);
        label.set("textAlign", self.alignment.as_str());
        label.set("textDecorationLine", self.decoration.as_str());
        if self.indentation != 0.0 {
            label.set("paddingLeft", self.indentation);
        }

        ResolvedText {
            style: merge(style, overrides),
            content: self.content.clone(),
        }
    }
}

impl Animate for Text {
    fn animation_track(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("{}:{}", self.kind, self.content))
    }
}
