//! Menu surfaces and permission-driven navigation.
//!
//! Two compiled-in catalogs describe what each surface can show:
//! - `TAB_BAR`: the roster module area's bottom tabs
//! - `QUICK_ACCESS`: the cross-module grid, grouped by section
//!
//! The resolver intersects a user's permission set with a catalog.

mod catalog;
mod resolver;
mod route;

pub use catalog::{Catalog, NavigationDestination, QUICK_ACCESS, TAB_BAR};
pub use resolver::{
    Navigation, NavigationModel, Reason, ResolvedDestination, baseline, resolve_destinations,
    resolve_with_set,
};
pub use route::{Route, Section};
