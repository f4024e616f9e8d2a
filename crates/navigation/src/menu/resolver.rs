//! Resolves a permission set against a catalog into a navigation model.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::catalog::{Catalog, NavigationDestination, QUICK_ACCESS, TAB_BAR};
use super::route::{Route, Section};
use crate::permission::{FlattenLimits, PermissionNode, PermissionSet, PermissionTree};

/// Why a destination is present in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    AlwaysVisible,
    Granted { module_key: &'static str },
}

/// One entry of a resolved menu surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDestination {
    #[serde(skip)]
    pub route: Route,
    pub route_name: &'static str,
    pub display_title: &'static str,
    pub icon_ref: &'static str,
    pub section: Section,
    pub reason: Reason,
}

impl ResolvedDestination {
    fn new(entry: &NavigationDestination, reason: Reason) -> Self {
        Self {
            route: entry.route,
            route_name: entry.route_name(),
            display_title: entry.display_title(),
            icon_ref: entry.icon_ref(),
            section: entry.section,
            reason,
        }
    }
}

/// Ordered, deduplicated destinations for one menu surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationModel {
    #[serde(skip)]
    surface: &'static str,
    entries: Vec<ResolvedDestination>,
}

impl NavigationModel {
    /// Name of the catalog this model was resolved from.
    pub fn surface(&self) -> &'static str {
        self.surface
    }

    pub fn entries(&self) -> &[ResolvedDestination] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDestination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, route: Route) -> bool {
        self.entries.iter().any(|e| e.route == route)
    }

    pub fn routes(&self) -> Vec<Route> {
        self.entries.iter().map(|e| e.route).collect()
    }

    pub fn route_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.route_name).collect()
    }

    /// Group entries by section, sections in order of first appearance.
    pub fn sections(&self) -> Vec<(Section, Vec<&ResolvedDestination>)> {
        let mut groups: Vec<(Section, Vec<&ResolvedDestination>)> = Vec::new();

        for entry in &self.entries {
            match groups.iter_mut().find(|(section, _)| *section == entry.section) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.section, vec![entry])),
            }
        }

        groups
    }
}

impl<'a> IntoIterator for &'a NavigationModel {
    type Item = &'a ResolvedDestination;
    type IntoIter = std::slice::Iter<'a, ResolvedDestination>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolve a flattened permission list against `catalog`.
pub fn resolve_destinations(flat: &[&PermissionNode], catalog: &Catalog) -> NavigationModel {
    resolve_with_set(&PermissionSet::from_flat(flat), catalog)
}

/// Resolve a normalized permission set against `catalog`.
///
/// Always-visible entries come first, then granted entries, both in catalog
/// order. The first occurrence of a route name wins.
pub fn resolve_with_set(granted: &PermissionSet, catalog: &Catalog) -> NavigationModel {
    let always = catalog
        .iter()
        .filter(|entry| entry.always_visible)
        .map(|entry| (entry, Reason::AlwaysVisible));
    let derived = catalog
        .iter()
        .filter(|entry| !entry.always_visible && granted.contains(entry.module_key))
        .map(|entry| {
            (
                entry,
                Reason::Granted {
                    module_key: entry.module_key,
                },
            )
        });

    let mut seen = HashSet::new();
    let entries: Vec<ResolvedDestination> = always
        .chain(derived)
        .filter(|(entry, _)| seen.insert(entry.route_name()))
        .map(|(entry, reason)| ResolvedDestination::new(entry, reason))
        .collect();

    debug!(
        surface = catalog.name(),
        granted = granted.len(),
        destinations = entries.len(),
        "resolved navigation"
    );

    NavigationModel {
        surface: catalog.name(),
        entries,
    }
}

/// The always-visible-only model for `catalog`.
pub fn baseline(catalog: &Catalog) -> NavigationModel {
    resolve_with_set(&PermissionSet::default(), catalog)
}

/// Both menu surfaces for one permission snapshot. The two models are
/// independent and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub tab_bar: NavigationModel,
    pub quick_access: NavigationModel,
}

impl Navigation {
    /// Resolve both surfaces from a permission tree.
    pub fn resolve(tree: &PermissionTree, limits: FlattenLimits) -> Self {
        Self::from_set(&PermissionSet::from_tree(tree, limits))
    }

    /// Resolve both surfaces from a normalized permission set.
    pub fn from_set(granted: &PermissionSet) -> Self {
        Self {
            tab_bar: resolve_with_set(granted, &TAB_BAR),
            quick_access: resolve_with_set(granted, &QUICK_ACCESS),
        }
    }

    /// Navigation with no grants: always-visible destinations only.
    pub fn baseline() -> Self {
        Self {
            tab_bar: baseline(&TAB_BAR),
            quick_access: baseline(&QUICK_ACCESS),
        }
    }
}
