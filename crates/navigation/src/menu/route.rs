//! Navigation destinations known to the rendering layer.

use std::fmt;

use serde::Serialize;

/// Every screen a menu surface can link to.
///
/// Descriptor functions are total over the enum, so a destination can never
/// be missing a route name, title or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    Home,
    News,
    RosterDashboard,
    CreateShift,
    BulkAssign,
    CustomAssign,
    EmployeeSearch,
    ActivityLog,
    TeamReport,
    Attendance,
    Profile,
    ChangePassword,
    Theme,
}

impl Route {
    /// All routes in declaration order.
    pub const ALL: [Route; 13] = [
        Route::Home,
        Route::News,
        Route::RosterDashboard,
        Route::CreateShift,
        Route::BulkAssign,
        Route::CustomAssign,
        Route::EmployeeSearch,
        Route::ActivityLog,
        Route::TeamReport,
        Route::Attendance,
        Route::Profile,
        Route::ChangePassword,
        Route::Theme,
    ];

    /// Stable identifier the rendering layer binds to a screen.
    pub const fn route_name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::News => "News",
            Route::RosterDashboard => "RosterDashboard",
            Route::CreateShift => "CreateShift",
            Route::BulkAssign => "BulkAssignShift",
            Route::CustomAssign => "CustomAssignShift",
            Route::EmployeeSearch => "EmployeeSearch",
            Route::ActivityLog => "ActivityLog",
            Route::TeamReport => "TeamReport",
            Route::Attendance => "Attendance",
            Route::Profile => "Profile",
            Route::ChangePassword => "ChangePassword",
            Route::Theme => "Theme",
        }
    }

    /// Human-readable label.
    pub const fn display_title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::News => "Circular / News",
            Route::RosterDashboard => "Dashboard",
            Route::CreateShift => "Create Shift",
            Route::BulkAssign => "Bulk Assign",
            Route::CustomAssign => "Custom Assign",
            Route::EmployeeSearch => "Employee Search",
            Route::ActivityLog => "Activity Log",
            Route::TeamReport => "Team Report",
            Route::Attendance => "Attendance",
            Route::Profile => "My Profile",
            Route::ChangePassword => "Change Password",
            Route::Theme => "Theme",
        }
    }

    /// Glyph name, opaque to everything but the rendering layer.
    pub const fn icon_ref(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::News => "newspaper",
            Route::RosterDashboard => "view-dashboard",
            Route::CreateShift => "calendar-plus",
            Route::BulkAssign => "account-multiple-plus",
            Route::CustomAssign => "account-edit",
            Route::EmployeeSearch => "account-search",
            Route::ActivityLog => "history",
            Route::TeamReport => "file-chart",
            Route::Attendance => "calendar-check",
            Route::Profile => "account-circle",
            Route::ChangePassword => "lock-reset",
            Route::Theme => "palette",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Labeled sub-group of a menu surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Destinations not tied to a module area.
    General,
    /// Primary area: shift planning and assignment.
    Roster,
    /// Secondary area: employee self-service and reports.
    Portal,
}

impl Section {
    /// Heading shown above the group.
    pub const fn label(self) -> &'static str {
        match self {
            Section::General => "General",
            Section::Roster => "Roster",
            Section::Portal => "Portal",
        }
    }
}
