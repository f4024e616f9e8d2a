#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for permission-driven menu resolution.

use std::collections::HashSet;

use serde_json::json;
use workforce_navigation::menu::{
    Catalog, Navigation, NavigationDestination, QUICK_ACCESS, Reason, Route, Section, TAB_BAR,
    resolve_destinations,
};
use workforce_navigation::permission::{FlattenLimits, PermissionTree, flatten, normalize_name};
use workforce_test_utils::{branch, chain, mirrored, node, retain_names, tree};

const CATALOGS: [Catalog; 2] = [TAB_BAR, QUICK_ACCESS];

fn resolve(tree: &PermissionTree, catalog: &Catalog) -> Vec<Route> {
    resolve_destinations(&flatten(tree.roots()), catalog).routes()
}

fn manager_tree() -> PermissionTree {
    tree()
        .module(
            "Roster",
            vec![
                node("Roster Dashboard"),
                branch(
                    "Shift",
                    vec![node("Create Shift"), node("Bulk Shift Assign"), node("Custom Shift Assign")],
                ),
                node("Employee Search"),
                node("Activity Logs"),
            ],
        )
        .module("Portal", vec![node("Team Report"), node("Attendance"), node("My Profile")])
        .build()
}

#[test]
fn test_example_scenario() {
    const ENTRIES: &[NavigationDestination] = &[
        NavigationDestination::always("home", Route::Home, Section::General),
        NavigationDestination::always("circular/news", Route::News, Section::General),
        NavigationDestination::granted("team report", Route::TeamReport, Section::Portal),
    ];
    let catalog = Catalog::new("example", ENTRIES);

    let t = tree()
        .grant("Team Report")
        .module("Unrelated Module", vec![node("Irrelevant")])
        .build();

    let model = resolve_destinations(&flatten(t.roots()), &catalog);
    assert_eq!(model.route_names(), vec!["Home", "News", "TeamReport"]);
}

#[test]
fn test_manager_navigation() {
    let t = manager_tree();

    assert_eq!(
        resolve(&t, &TAB_BAR),
        vec![
            Route::Home,
            Route::News,
            Route::RosterDashboard,
            Route::CreateShift,
            Route::EmployeeSearch,
            Route::ActivityLog,
        ]
    );
    assert_eq!(
        resolve(&t, &QUICK_ACCESS),
        vec![
            Route::Home,
            Route::News,
            Route::ChangePassword,
            Route::Theme,
            Route::RosterDashboard,
            Route::CreateShift,
            Route::BulkAssign,
            Route::CustomAssign,
            Route::EmployeeSearch,
            Route::ActivityLog,
            Route::TeamReport,
            Route::Attendance,
            Route::Profile,
        ]
    );
}

#[test]
fn test_idempotent() {
    let t = manager_tree();
    for catalog in &CATALOGS {
        let first = resolve_destinations(&flatten(t.roots()), catalog);
        let second = resolve_destinations(&flatten(t.roots()), catalog);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_always_visible_present_exactly_once() {
    let trees = [
        PermissionTree::empty(),
        PermissionTree::from_json_lenient("null"),
        manager_tree(),
        tree().grant_all(&["Home", "home", "Circular/News", "Circular", "Theme"]).build(),
    ];

    for t in &trees {
        for catalog in &CATALOGS {
            let routes = resolve(t, catalog);
            for entry in catalog.iter().filter(|e| e.always_visible) {
                let count = routes.iter().filter(|r| **r == entry.route).count();
                assert_eq!(count, 1, "{} in {}", entry.route, catalog.name());
            }
        }
    }
}

#[test]
fn test_no_duplicate_route_names() {
    let everything: Vec<&str> = QUICK_ACCESS
        .iter()
        .chain(TAB_BAR.iter())
        .map(|e| e.module_key)
        .collect();
    let t = tree().grant_all(&everything).grant_all(&everything).build();

    for catalog in &CATALOGS {
        let model = resolve_destinations(&flatten(t.roots()), catalog);
        let unique: HashSet<&str> = model.route_names().into_iter().collect();
        assert_eq!(unique.len(), model.len(), "{}", catalog.name());
    }
}

#[test]
fn test_order_is_catalog_determined() {
    let t = manager_tree();
    let flat_reversed = tree()
        .grant_all(&[
            "my profile",
            "attendance",
            "team report",
            "activity logs",
            "employee search",
            "custom shift assign",
            "bulk shift assign",
            "create shift",
            "shift",
            "roster dashboard",
            "portal",
            "roster",
        ])
        .build();

    for catalog in &CATALOGS {
        let expected = resolve_destinations(&flatten(t.roots()), catalog);
        assert_eq!(resolve_destinations(&flatten(mirrored(&t).roots()), catalog), expected);
        assert_eq!(resolve_destinations(&flatten(flat_reversed.roots()), catalog), expected);
    }
}

#[test]
fn test_unknown_names_ignored() {
    let noisy = tree()
        .module(
            "Payroll",
            vec![node("Team Report"), branch("Loans", vec![node("Advance Salary")])],
        )
        .grant("Create Shift")
        .grant("Leave Approval")
        .build();
    let known: Vec<&str> = QUICK_ACCESS
        .iter()
        .chain(TAB_BAR.iter())
        .map(|e| e.module_key)
        .collect();
    let clean = retain_names(&noisy, &known);

    assert_eq!(clean, tree().grant("Team Report").grant("Create Shift").build());
    for catalog in &CATALOGS {
        assert_eq!(
            resolve_destinations(&flatten(noisy.roots()), catalog),
            resolve_destinations(&flatten(clean.roots()), catalog)
        );
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let padded = tree().grant("  Team Report  ").build();
    let plain = tree().grant("team report").build();
    let shouting = tree().grant("TEAM REPORT\t").build();

    let expected = resolve(&plain, &QUICK_ACCESS);
    assert!(expected.contains(&Route::TeamReport));
    assert_eq!(resolve(&padded, &QUICK_ACCESS), expected);
    assert_eq!(resolve(&shouting, &QUICK_ACCESS), expected);
}

#[test]
fn test_aliases_unlock_both_surfaces() {
    let t = tree().grant("Activity Logs").grant("Roster").build();
    let navigation = Navigation::resolve(&t, FlattenLimits::default());
    for model in [&navigation.tab_bar, &navigation.quick_access] {
        assert!(model.contains(Route::ActivityLog), "{}", model.surface());
        assert!(model.contains(Route::RosterDashboard), "{}", model.surface());
    }

    // Every key of a route offered on both surfaces unlocks it on both.
    for entry in TAB_BAR.iter().chain(QUICK_ACCESS.iter()) {
        if entry.always_visible {
            continue;
        }
        let t = tree().grant(entry.module_key).build();
        for catalog in &CATALOGS {
            if catalog.iter().any(|c| c.route == entry.route) {
                assert!(
                    resolve(&t, catalog).contains(&entry.route),
                    "'{}' does not unlock {} on {}",
                    entry.module_key,
                    entry.route,
                    catalog.name()
                );
            }
        }
    }
}

#[test]
fn test_inner_nodes_grant() {
    // "Roster" is a parent module in the payload and an alias in the tab bar.
    let t = tree().module("Roster", vec![node("Unknown Child")]).build();
    assert!(resolve(&t, &TAB_BAR).contains(&Route::RosterDashboard));
}

#[test]
fn test_every_entry_is_explained() {
    let t = manager_tree();
    let granted: HashSet<String> = flatten(t.roots())
        .iter()
        .map(|n| normalize_name(&n.name))
        .collect();

    for catalog in &CATALOGS {
        for entry in &resolve_destinations(&flatten(t.roots()), catalog) {
            match entry.reason {
                Reason::AlwaysVisible => {
                    assert!(catalog.iter().any(|c| c.route == entry.route && c.always_visible));
                }
                Reason::Granted { module_key } => assert!(granted.contains(module_key)),
            }
        }
    }
}

#[test]
fn test_malformed_payloads_degrade_to_baseline() {
    let payloads = [
        "",
        "not json",
        "{}",
        "[]",
        "[1, 2, 3]",
        r#"{"error": "token expired"}"#,
        r#"[{"title": "Team Report"}]"#,
    ];

    for payload in payloads {
        let t = PermissionTree::from_json_lenient(payload);
        assert_eq!(
            Navigation::resolve(&t, FlattenLimits::default()),
            Navigation::baseline(),
            "payload {payload:?}"
        );
    }
}

#[test]
fn test_partial_payload_keeps_valid_grants() {
    let payload = json!([
        {"name": null, "children": [{"name": "Team Report"}]},
        {"name": "Portal", "children": "oops"},
        42
    ]);

    let t = PermissionTree::from_value(&payload);
    assert!(resolve(&t, &QUICK_ACCESS).contains(&Route::TeamReport));
}

#[test]
fn test_depth_limit_bounds_grants() {
    let deep = chain(40, "Team Report");

    let shallow = Navigation::resolve(&deep, FlattenLimits::default());
    assert!(!shallow.quick_access.contains(Route::TeamReport));

    let limits = FlattenLimits {
        max_depth: 40,
        ..FlattenLimits::default()
    };
    assert!(Navigation::resolve(&deep, limits).quick_access.contains(Route::TeamReport));
}

#[test]
fn test_navigation_json_shape() {
    let t = tree().grant("Create Shift").build();
    let value = serde_json::to_value(Navigation::resolve(&t, FlattenLimits::default())).unwrap();

    assert_eq!(value["tab_bar"].as_array().unwrap().len(), 3);
    assert_eq!(value["tab_bar"][2]["route_name"], "CreateShift");
    assert_eq!(value["quick_access"][4]["section"], "roster");
    assert_eq!(value["quick_access"][4]["reason"]["module_key"], "create shift");
}
