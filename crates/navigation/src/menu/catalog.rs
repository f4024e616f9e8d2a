//! Compiled-in catalogs mapping module names to destinations.
//!
//! Declaration order is display order. Reordering entries here reorders the
//! menus; nothing in a permission payload can.

use std::collections::HashSet;

use super::route::{Route, Section};
use crate::error::{NavError, NavResult};
use crate::permission::normalize_name;

/// A catalog entry: which module name unlocks which destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDestination {
    /// Normalized module name (lowercase, trimmed).
    pub module_key: &'static str,
    pub route: Route,
    /// Shown regardless of grants.
    pub always_visible: bool,
    pub section: Section,
}

impl NavigationDestination {
    /// An entry unlocked by `module_key`.
    pub const fn granted(module_key: &'static str, route: Route, section: Section) -> Self {
        Self {
            module_key,
            route,
            always_visible: false,
            section,
        }
    }

    /// An entry every authenticated user sees.
    pub const fn always(module_key: &'static str, route: Route, section: Section) -> Self {
        Self {
            module_key,
            route,
            always_visible: true,
            section,
        }
    }

    pub const fn route_name(&self) -> &'static str {
        self.route.route_name()
    }

    pub const fn display_title(&self) -> &'static str {
        self.route.display_title()
    }

    pub const fn icon_ref(&self) -> &'static str {
        self.route.icon_ref()
    }
}

/// An ordered, named table of destinations for one menu surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    name: &'static str,
    entries: &'static [NavigationDestination],
}

impl Catalog {
    pub const fn new(name: &'static str, entries: &'static [NavigationDestination]) -> Self {
        Self { name, entries }
    }

    /// Surface name (e.g. "tab-bar").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'static [NavigationDestination] {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static NavigationDestination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every key is non-empty, already normalized, and unique.
    pub fn validate(&self) -> NavResult<()> {
        let mut seen = HashSet::new();

        for entry in self.entries {
            if entry.module_key.is_empty() {
                return Err(NavError::InvalidCatalog(format!(
                    "{}: empty module key for route {}",
                    self.name, entry.route
                )));
            }
            if normalize_name(entry.module_key) != entry.module_key {
                return Err(NavError::InvalidCatalog(format!(
                    "{}: module key '{}' is not normalized",
                    self.name, entry.module_key
                )));
            }
            if !seen.insert(entry.module_key) {
                return Err(NavError::InvalidCatalog(format!(
                    "{}: duplicate module key '{}'",
                    self.name, entry.module_key
                )));
            }
        }

        Ok(())
    }
}

impl IntoIterator for &Catalog {
    type Item = &'static NavigationDestination;
    type IntoIter = std::slice::Iter<'static, NavigationDestination>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

use NavigationDestination as D;

/// Bottom tab bar of the roster module area.
pub const TAB_BAR: Catalog = Catalog::new(
    "tab-bar",
    &[
        D::always("home", Route::Home, Section::General),
        D::always("circular/news", Route::News, Section::General),
        D::granted("circular", Route::News, Section::General),
        D::granted("roster dashboard", Route::RosterDashboard, Section::General),
        D::granted("roster", Route::RosterDashboard, Section::General),
        D::granted("create shift", Route::CreateShift, Section::General),
        D::granted("employee search", Route::EmployeeSearch, Section::General),
        D::granted("activity log", Route::ActivityLog, Section::General),
        D::granted("activity logs", Route::ActivityLog, Section::General),
    ],
);

/// Cross-module quick-access grid.
pub const QUICK_ACCESS: Catalog = Catalog::new(
    "quick-access",
    &[
        D::always("home", Route::Home, Section::General),
        D::always("circular/news", Route::News, Section::General),
        D::always("change password", Route::ChangePassword, Section::General),
        D::always("theme", Route::Theme, Section::General),
        D::granted("circular", Route::News, Section::General),
        D::granted("roster dashboard", Route::RosterDashboard, Section::Roster),
        D::granted("roster", Route::RosterDashboard, Section::Roster),
        D::granted("create shift", Route::CreateShift, Section::Roster),
        D::granted("bulk shift assign", Route::BulkAssign, Section::Roster),
        D::granted("custom shift assign", Route::CustomAssign, Section::Roster),
        D::granted("employee search", Route::EmployeeSearch, Section::Roster),
        D::granted("activity log", Route::ActivityLog, Section::Roster),
        D::granted("activity logs", Route::ActivityLog, Section::Roster),
        D::granted("team report", Route::TeamReport, Section::Portal),
        D::granted("attendance", Route::Attendance, Section::Portal),
        D::granted("my profile", Route::Profile, Section::Portal),
    ],
);
