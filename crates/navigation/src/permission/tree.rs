//! Permission tree model and JSON decoding.
//!
//! Two decoding paths exist. `from_json` is strict and reports malformed
//! payloads. `from_json_lenient` and `from_value` never fail: anything they
//! cannot make sense of degrades to fewer grants, down to an empty tree.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::traverse::{FlattenLimits, flatten_with_limits};
use crate::error::NavResult;

/// Keys identity services use to wrap the permission forest.
const WRAPPER_KEYS: [&str; 3] = ["data", "permissions", "modules"];

/// Nesting beyond this is dropped during lenient decoding. Flattening has
/// its own, tighter default (`DEFAULT_MAX_DEPTH`).
const MAX_DECODE_DEPTH: usize = 128;

/// A single module grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionNode {
    /// Module name as sent by the identity service (not normalized).
    pub name: String,
    /// Nested grants, in the order the service sent them.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<PermissionNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PermissionNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PermissionNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PermissionNode {
    /// Create a node without children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn with_children(name: impl Into<String>, children: Vec<PermissionNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn from_value(value: &Value, depth: usize) -> Option<Self> {
        let Value::Object(map) = value else {
            warn!(kind = value_kind(value), "skipping non-object permission entry");
            return None;
        };

        let name = match map.get("name") {
            Some(Value::String(name)) => name.clone(),
            other => {
                debug!(
                    kind = other.map_or("missing", value_kind),
                    "permission entry has no string name"
                );
                String::new()
            }
        };

        let children = match map.get("children") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(_)) if depth >= MAX_DECODE_DEPTH => {
                warn!(
                    max_depth = MAX_DECODE_DEPTH,
                    "permission payload nested too deeply, dropping children"
                );
                Vec::new()
            }
            Some(Value::Array(items)) => decode_nodes(items, depth + 1),
            Some(other) => {
                warn!(
                    name = %name,
                    kind = value_kind(other),
                    "permission children is not an array, ignoring"
                );
                Vec::new()
            }
        };

        Some(Self { name, children })
    }
}

fn decode_nodes(items: &[Value], depth: usize) -> Vec<PermissionNode> {
    items
        .iter()
        .filter_map(|item| PermissionNode::from_value(item, depth))
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The forest of grants for one authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTree {
    roots: Vec<PermissionNode>,
}

impl PermissionTree {
    /// Create a tree from its root nodes.
    pub fn new(roots: Vec<PermissionNode>) -> Self {
        Self { roots }
    }

    /// A tree that grants nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Root nodes in service order.
    pub fn roots(&self) -> &[PermissionNode] {
        &self.roots
    }

    /// Whether the tree has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order view of every node, bounded by `limits`.
    pub fn flatten(&self, limits: FlattenLimits) -> Vec<&PermissionNode> {
        flatten_with_limits(&self.roots, limits)
    }

    /// Strictly decode a JSON array of permission nodes.
    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a permission payload, degrading to an empty tree on any error.
    pub fn from_json_lenient(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                warn!(error = %e, "unparseable permission payload, using empty tree");
                Self::empty()
            }
        }
    }

    /// Build a tree from an already-parsed payload.
    ///
    /// Accepts an array of nodes, a single node object, or an object that
    /// wraps the array under `data`, `permissions` or `modules`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::new(decode_nodes(items, 1)),
            Value::Object(map) if map.contains_key("name") => {
                Self::new(PermissionNode::from_value(value, 1).into_iter().collect())
            }
            Value::Object(map) => match WRAPPER_KEYS.iter().find_map(|key| map.get(*key)) {
                Some(inner) => Self::from_value(inner),
                None => {
                    warn!("permission payload object has no recognizable forest");
                    Self::empty()
                }
            },
            Value::Null => {
                debug!("permission payload is null");
                Self::empty()
            }
            other => {
                warn!(kind = value_kind(other), "unexpected permission payload");
                Self::empty()
            }
        }
    }
}

impl From<Vec<PermissionNode>> for PermissionTree {
    fn from(roots: Vec<PermissionNode>) -> Self {
        Self::new(roots)
    }
}

impl FromIterator<PermissionNode> for PermissionTree {
    fn from_iter<I: IntoIterator<Item = PermissionNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
