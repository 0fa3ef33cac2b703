//! Caller override merge.
//!
//! Overrides are applied as the very last resolution step. The merge is
//! exactly one level deep: for each group in the override, its keys replace
//! the resolved group's keys of the same name, and every resolved key the
//! override does not mention survives. Values are leaves, so nothing below
//! the group level is ever merged recursively.

use super::tree::StyleTree;

/// Merges a caller override over a resolved tree.
///
/// A `None` override returns `resolved` unchanged. Groups that only exist
/// in the override are added as-is.
///
/// # Example
///
/// ```rust
/// use livery::{merge, StyleTree};
///
/// let resolved = StyleTree::new()
///     .with("container", "a", 1)
///     .with("container", "b", 2);
/// let overrides = StyleTree::new().with("container", "b", 9);
///
/// let merged = merge(resolved, Some(&overrides));
/// assert_eq!(merged, StyleTree::new().with("container", "a", 1).with("container", "b", 9));
/// ```
pub fn merge(resolved: StyleTree, overrides: Option<&StyleTree>) -> StyleTree {
    let Some(overrides) = overrides else {
        return resolved;
    };

    let mut merged = resolved;
    for (name, group) in overrides.groups() {
        merged.group_mut(name).apply(group);
    }
    merged
}
