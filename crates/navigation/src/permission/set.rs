//! Normalized permission membership.

use std::collections::HashSet;

use super::traverse::{FlattenLimits, flatten_with_limits};
use super::tree::{PermissionNode, PermissionTree};

/// Normalize a module name for catalog matching: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Set of normalized module names granted to a user.
///
/// Only membership matters; order and multiplicity of the source tree are
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    names: HashSet<String>,
}

impl PermissionSet {
    /// Build from a flattened permission list.
    pub fn from_flat(flat: &[&PermissionNode]) -> Self {
        flat.iter().map(|node| node.name.as_str()).collect()
    }

    /// Flatten `tree` under `limits` and collect its names.
    pub fn from_tree(tree: &PermissionTree, limits: FlattenLimits) -> Self {
        Self::from_flat(&flatten_with_limits(tree.roots(), limits))
    }

    /// Check an already-normalized key.
    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(key)
    }

    /// Check a raw module name, normalizing it first.
    pub fn grants(&self, name: &str) -> bool {
        self.contains(&normalize_name(name))
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is granted.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate normalized names in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(|name| normalize_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }
}
