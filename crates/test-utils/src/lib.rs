//! Workforce navigation test utilities.
//!
//! Fixture builders for permission trees as an identity service would send
//! them, plus helpers for reshaping trees without changing what they grant.

use serde_json::Value as JsonValue;
use workforce_navigation::permission::{PermissionNode, PermissionTree, normalize_name};

/// A permission node without children.
pub fn node(name: &str) -> PermissionNode {
    PermissionNode::new(name)
}

/// A permission node with children.
pub fn branch(name: &str, children: Vec<PermissionNode>) -> PermissionNode {
    PermissionNode::with_children(name, children)
}

/// Start building a permission tree.
pub fn tree() -> TreeBuilder {
    TreeBuilder::default()
}

/// A tree builder for creating test fixtures.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    roots: Vec<PermissionNode>,
}

impl TreeBuilder {
    /// Add a root grant without children.
    pub fn grant(mut self, name: &str) -> Self {
        self.roots.push(node(name));
        self
    }

    /// Add several root grants without children.
    pub fn grant_all(mut self, names: &[&str]) -> Self {
        self.roots.extend(names.iter().map(|name| node(name)));
        self
    }

    /// Add a root grant with children.
    pub fn module(mut self, name: &str, children: Vec<PermissionNode>) -> Self {
        self.roots.push(branch(name, children));
        self
    }

    /// Build the tree.
    pub fn build(self) -> PermissionTree {
        PermissionTree::new(self.roots)
    }

    /// Render the tree as the identity service's JSON payload.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.roots.iter().map(node_json).collect())
    }
}

fn node_json(node: &PermissionNode) -> JsonValue {
    let mut obj = serde_json::json!({ "name": node.name });
    if !node.children.is_empty() {
        obj["children"] = JsonValue::Array(node.children.iter().map(node_json).collect());
    }
    obj
}

/// Mirror a tree: reverse root order and every child list.
///
/// The mirrored tree grants the same module names in a different order.
pub fn mirrored(tree: &PermissionTree) -> PermissionTree {
    fn mirror(node: &PermissionNode) -> PermissionNode {
        PermissionNode::with_children(
            node.name.clone(),
            node.children.iter().rev().map(mirror).collect(),
        )
    }
    tree.roots().iter().rev().map(mirror).collect()
}

/// Remove every node whose name is not in `keep` (compared normalized);
/// children of removed nodes are lifted into the parent's place.
pub fn retain_names(tree: &PermissionTree, keep: &[&str]) -> PermissionTree {
    let keep: Vec<String> = keep.iter().map(|k| normalize_name(k)).collect();

    fn prune(nodes: &[PermissionNode], keep: &[String]) -> Vec<PermissionNode> {
        let mut out = Vec::new();
        for node in nodes {
            let children = prune(&node.children, keep);
            if keep.contains(&normalize_name(&node.name)) {
                out.push(PermissionNode::with_children(node.name.clone(), children));
            } else {
                out.extend(children);
            }
        }
        out
    }

    PermissionTree::new(prune(tree.roots(), &keep))
}

/// A single chain of nested grants `depth` levels deep, with `leaf` at
/// the bottom.
pub fn chain(depth: usize, leaf: &str) -> PermissionTree {
    let mut current = node(leaf);
    for level in (1..depth).rev() {
        current = branch(&format!("level {level}"), vec![current]);
    }
    PermissionTree::new(vec![current])
}
