//! Prints resolved component styles.
//!
//! ```text
//! livery button --raised --label Save --shade dark
//! livery header --label Inbox --overlay translucent-clear --platform ios --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use livery::inspect::{render_tree, to_json};
use livery::{
    Alignment, Button, Decoration, Header, Overlay, Platform, Shade, Shape, Size, StyleContext,
    StyleTree, Text, TextField, ThemeRegistry, Weight,
};

#[derive(Debug, Parser)]
#[command(name = "livery", version, about = "Resolve themed component styles")]
struct Cli {
    /// Theme file (YAML or JSON) layered over the built-in theme.
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[arg(long, global = true, default_value = "android")]
    platform: Platform,

    /// light, dark or auto (follow the operating system).
    #[arg(long, global = true)]
    shade: Option<String>,

    /// Override tree as JSON, e.g. '{"container":{"height":40}}'.
    #[arg(long = "override", global = true)]
    overrides: Option<String>,

    /// Print the full resolved record as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    component: Component,
}

#[derive(Debug, Subcommand)]
enum Component {
    Button(ButtonArgs),
    Text(TextArgs),
    Field(FieldArgs),
    Header(HeaderArgs),
}

#[derive(Debug, Args)]
struct ButtonArgs {
    #[arg(long, default_value = "Button")]
    label: String,
    /// Raised instead of flat.
    #[arg(long)]
    raised: bool,
    #[arg(long)]
    color: Option<String>,
    #[arg(long, default_value = "square")]
    shape: Shape,
    #[arg(long)]
    icon: Option<String>,
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    busy: bool,
}

#[derive(Debug, Args)]
struct TextArgs {
    #[arg(long, default_value = "Text")]
    content: String,
    /// headline, title, subtitle, paragraph or caption.
    #[arg(long, default_value = "paragraph")]
    role: String,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    size: Option<Size>,
    #[arg(long)]
    weight: Option<Weight>,
    #[arg(long, default_value = "left")]
    alignment: Alignment,
    #[arg(long, default_value = "none")]
    decoration: Decoration,
}

#[derive(Debug, Args)]
struct FieldArgs {
    #[arg(long)]
    label: Option<String>,
    #[arg(long)]
    placeholder: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    focused: bool,
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    error: Option<String>,
}

#[derive(Debug, Args)]
struct HeaderArgs {
    #[arg(long, default_value = "Header")]
    label: String,
    #[arg(long)]
    overlay: Option<Overlay>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    oversized: bool,
    /// Minimization progress between 0 (expanded) and 1 (minimized).
    #[arg(long, default_value_t = 0.0)]
    progress: f64,
    #[arg(long)]
    max_width: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => ThemeRegistry::load(path).with_context(|| format!("loading theme {}", path.display()))?,
        None => ThemeRegistry::standard().clone(),
    };

    let mut ctx = StyleContext::new(&theme).platform(cli.platform);
    ctx = match cli.shade.as_deref() {
        None => ctx,
        Some("auto") => ctx.system_shade(),
        Some(name) => ctx.shade(name.parse::<Shade>()?),
    };

    let overrides: Option<StyleTree> = cli
        .overrides
        .as_deref()
        .map(serde_json::from_str::<StyleTree>)
        .transpose()
        .context("parsing --override")?;
    let overrides = overrides.as_ref();

    let (style, record) = match cli.component {
        Component::Button(args) => {
            let mut button = if args.raised {
                Button::raised(&args.label)
            } else {
                Button::flat(&args.label)
            };
            button = button.shape(args.shape).disabled(args.disabled).busy(args.busy);
            if let Some(color) = &args.color {
                button = button.color(color);
            }
            if let Some(icon) = &args.icon {
                button = button.icon(icon);
            }
            let resolved = button.resolve(&ctx, overrides);
            (resolved.style.clone(), to_json(&resolved)?)
        }
        Component::Text(args) => {
            let mut text = match args.role.as_str() {
                "headline" => Text::headline(&args.content),
                "title" => Text::title(&args.content),
                "subtitle" => Text::subtitle(&args.content),
                "paragraph" => Text::paragraph(&args.content),
                "caption" => Text::caption(&args.content),
                other => anyhow::bail!("unknown text role '{other}'"),
            };
            text = text.alignment(args.alignment).decoration(args.decoration);
            if let Some(color) = &args.color {
                text = text.color(color);
            }
            if let Some(size) = args.size {
                text = text.size(size);
            }
            if let Some(weight) = args.weight {
                text = text.weight(weight);
            }
            let resolved = text.resolve(&ctx, overrides);
            (resolved.style.clone(), to_json(&resolved)?)
        }
        Component::Field(args) => {
            let mut field = TextField::new().focused(args.focused).disabled(args.disabled);
            if let Some(label) = &args.label {
                field = field.label(label);
            }
            if let Some(placeholder) = &args.placeholder {
                field = field.placeholder(placeholder);
            }
            if let Some(color) = &args.color {
                field = field.color(color);
            }
            if let Some(error) = &args.error {
                field = field.error(error);
            }
            let resolved = field.resolve(&ctx, overrides);
            (resolved.style.clone(), to_json(&resolved)?)
        }
        Component::Header(args) => {
            let mut header = Header::new(&args.label);
            if args.oversized {
                header = header.oversized(true);
            }
            if let Some(overlay) = args.overlay {
                header = header.overlay(overlay);
            }
            if let Some(color) = &args.color {
                header = header.color(color);
            }
            if let Some(columns) = args.max_width {
                header = header.label_max_width(columns);
            }
            let resolved = header.resolve_at(&ctx, args.progress, overrides);
            (resolved.style.clone(), to_json(&resolved)?)
        }
    };

    if cli.json {
        println!("{record}");
    } else {
        print!("{}", render_tree(&style, console::colors_enabled()));
    }
    Ok(())
}
