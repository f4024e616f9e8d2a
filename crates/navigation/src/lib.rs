//! Workforce navigation library
//!
//! Turns the permission tree an identity service returns after login into
//! the menu surfaces a user may see: the roster tab bar and the
//! cross-module quick-access grid.
//!
//! ```
//! use workforce_navigation::menu::{Route, TAB_BAR, resolve_destinations};
//! use workforce_navigation::permission::{PermissionTree, flatten};
//!
//! let tree = PermissionTree::from_json_lenient(r#"[{"name": " Create Shift "}]"#);
//! let model = resolve_destinations(&flatten(tree.roots()), &TAB_BAR);
//! assert_eq!(model.routes(), vec![Route::Home, Route::News, Route::CreateShift]);
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod permission;
pub mod session;

pub use error::{NavError, NavResult};
pub use menu::{Navigation, NavigationModel};
pub use permission::{PermissionNode, PermissionTree};
pub use session::NavigationSession;
