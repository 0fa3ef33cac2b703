//! Style groups and trees.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A flat set of style properties, e.g. everything applied to a label.
///
/// Property names follow the renderer's camelCase convention
/// (`backgroundColor`, `fontSize`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleGroup {
    props: BTreeMap<String, StyleValue>,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the group for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a property in place, replacing any previous value.
    pub fn set<V: Into<StyleValue>>(&mut self, name: &str, value: V) {
        self.props.insert(name.to_string(), value.into());
    }

    /// Looks up a property.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Removes a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.props.remove(name)
    }

    /// Copies every property of `other` over this group.
    ///
    /// Keys present in `other` win; keys only present here survive.
    pub fn apply(&mut self, other: &StyleGroup) {
        for (name, value) in &other.props {
            self.props.insert(name.clone(), value.clone());
        }
    }

    /// Returns true if the property is present.
    pub fn has(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleGroup {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A style tree: named groups of properties.
///
/// The same type serves as resolver output and as a caller-supplied
/// override, where it is usually sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTree {
    groups: BTreeMap<String, StyleGroup>,
}

impl StyleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single property, creating the group if needed.
    pub fn with<V: Into<StyleValue>>(mut self, group: &str, name: &str, value: V) -> Self {
        self.set(group, name, value);
        self
    }

    /// Adds a whole group, replacing any existing group with that name.
    pub fn with_group(mut self, name: &str, group: StyleGroup) -> Self {
        self.groups.insert(name.to_string(), group);
        self
    }

    /// Sets a single property in place, creating the group if needed.
    pub fn set<V: Into<StyleValue>>(&mut self, group: &str, name: &str, value: V) {
        self.group_mut(group).set(name, value);
    }

    /// Returns a group for editing, creating it empty if absent.
    pub fn group_mut(&mut self, name: &str) -> &mut StyleGroup {
        self.groups.entry(name.to_string()).or_default()
    }

    pub fn group(&self, name: &str) -> Option<&StyleGroup> {
        self.groups.get(name)
    }

    /// Looks up `group.name`.
    pub fn get(&self, group: &str, name: &str) -> Option<&StyleValue> {
        self.groups.get(group).and_then(|g| g.get(name))
    }

    /// Removes a whole group.
    pub fn remove_group(&mut self, name: &str) -> Option<StyleGroup> {
        self.groups.remove(name)
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterates groups in name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &StyleGroup)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
