//! Permission trees supplied by the identity service.
//!
//! The identity service hands back a forest of module grants. This module
//! provides:
//! - The tree model and lenient JSON decoding
//! - Bounded pre-order flattening
//! - A normalized membership set used by the menu resolver

mod set;
mod traverse;
mod tree;

pub use set::{PermissionSet, normalize_name};
pub use traverse::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, FlattenLimits, flatten, flatten_with_limits,
};
pub use tree::{PermissionNode, PermissionTree};
