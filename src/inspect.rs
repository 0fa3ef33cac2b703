//! Human- and machine-readable dumps of resolved style trees.

use console::Style;
use serde::Serialize;

use crate::style::StyleTree;

/// Renders a style tree as an indented listing.
///
/// Group names are bold and property names dim when `styled` is true;
/// otherwise the output is plain text.
///
/// ```text
/// container
///   backgroundColor: #1565C0
///   height: 36
/// ```
pub fn render_tree(tree: &StyleTree, styled: bool) -> String {
    let group_style = Style::new().bold().force_styling(styled);
    let key_style = Style::new().dim().force_styling(styled);

    let mut out = String::new();
    for (name, group) in tree.groups() {
        out.push_str(&group_style.apply_to(name).to_string());
        out.push('\n');
        for (key, value) in group.iter() {
            out.push_str(&format!("  {}: {}\n", key_style.apply_to(key), value));
        }
    }
    out
}

/// Serializes any resolved record as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
