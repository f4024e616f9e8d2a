//! Pre-order flattening of permission forests.

use tracing::warn;

use super::tree::PermissionNode;

/// Default maximum tree depth visited by `flatten`.
///
/// Tighter than the 128-level bound of lenient decoding: grants nested
/// deeper than this decode but are pruned here unless the limit is raised
/// (`NAV_MAX_TREE_DEPTH`).
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default maximum number of nodes emitted by `flatten`.
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Bounds applied while walking an untrusted permission tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenLimits {
    /// Deepest level visited; roots are level 1.
    pub max_depth: usize,
    /// Maximum number of nodes emitted.
    pub max_nodes: usize,
}

impl FlattenLimits {
    /// Limits that never truncate.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_nodes: usize::MAX,
        }
    }
}

impl Default for FlattenLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Flatten a forest in pre-order using the default limits.
///
/// Every node is emitted, not only leaves. A node comes before its children
/// and siblings keep their order. Duplicates are kept.
///
/// Nodes below `DEFAULT_MAX_DEPTH` are dropped even when decoding kept
/// them; use `flatten_with_limits` to walk deeper.
pub fn flatten(forest: &[PermissionNode]) -> Vec<&PermissionNode> {
    flatten_with_limits(forest, FlattenLimits::default())
}

/// Flatten a forest in pre-order, pruning subtrees below `max_depth` and
/// stopping after `max_nodes` nodes.
pub fn flatten_with_limits(forest: &[PermissionNode], limits: FlattenLimits) -> Vec<&PermissionNode> {
    let mut flat = Vec::new();
    let mut pruned = 0usize;
    let mut truncated = false;

    // Children are pushed in reverse so the first child pops first.
    let mut stack: Vec<(&PermissionNode, usize)> = forest.iter().rev().map(|n| (n, 1)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > limits.max_depth {
            pruned += 1;
            continue;
        }
        if flat.len() >= limits.max_nodes {
            truncated = true;
            break;
        }

        flat.push(node);
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    if pruned > 0 {
        warn!(
            max_depth = limits.max_depth,
            pruned_subtrees = pruned,
            "permission tree exceeds depth limit"
        );
    }
    if truncated {
        warn!(
            max_nodes = limits.max_nodes,
            "permission tree exceeds node limit, truncating"
        );
    }

    flat
}
