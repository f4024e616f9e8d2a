//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};

use crate::permission::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, FlattenLimits};

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest permission tree level visited (default: 32).
    pub max_tree_depth: usize,

    /// Maximum permission nodes considered per tree (default: 10000).
    pub max_tree_nodes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_tree_depth: usize = lookup("NAV_MAX_TREE_DEPTH")
            .unwrap_or_else(|| DEFAULT_MAX_DEPTH.to_string())
            .trim()
            .parse()
            .context("NAV_MAX_TREE_DEPTH must be a positive integer")?;

        let max_tree_nodes: usize = lookup("NAV_MAX_TREE_NODES")
            .unwrap_or_else(|| DEFAULT_MAX_NODES.to_string())
            .trim()
            .parse()
            .context("NAV_MAX_TREE_NODES must be a positive integer")?;

        if max_tree_depth == 0 {
            bail!("NAV_MAX_TREE_DEPTH must be at least 1");
        }
        if max_tree_nodes == 0 {
            bail!("NAV_MAX_TREE_NODES must be at least 1");
        }

        Ok(Self {
            max_tree_depth,
            max_tree_nodes,
        })
    }

    /// Traversal bounds for permission trees.
    pub fn flatten_limits(&self) -> FlattenLimits {
        FlattenLimits {
            max_depth: self.max_tree_depth,
            max_nodes: self.max_tree_nodes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tree_depth: DEFAULT_MAX_DEPTH,
            max_tree_nodes: DEFAULT_MAX_NODES,
        }
    }
}
