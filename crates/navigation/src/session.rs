//! Session-scoped permission snapshot with memoized navigation.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::menu::Navigation;
use crate::permission::{FlattenLimits, PermissionTree};

/// Holds the current user's permission tree and the navigation derived
/// from it.
///
/// Cheap to clone; clones share state. Replacing the tree is last-write-wins
/// and readers always observe a fully resolved `Navigation`.
#[derive(Clone)]
pub struct NavigationSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    limits: FlattenLimits,
    state: RwLock<SessionState>,
}

#[derive(Default)]
struct SessionState {
    tree: Option<Arc<PermissionTree>>,
    generation: u64,
    memo: Option<Memo>,
}

/// Navigation computed for a specific tree snapshot.
struct Memo {
    tree: Option<Arc<PermissionTree>>,
    navigation: Arc<Navigation>,
}

impl SessionState {
    /// The memoized navigation, if it was built from the current snapshot.
    fn cached(&self) -> Option<Arc<Navigation>> {
        let memo = self.memo.as_ref()?;
        let current = match (&memo.tree, &self.tree) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        current.then(|| Arc::clone(&memo.navigation))
    }
}

impl NavigationSession {
    /// Create a session with no permission tree.
    pub fn new(limits: FlattenLimits) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                limits,
                state: RwLock::new(SessionState::default()),
            }),
        }
    }

    /// Install a new permission snapshot. Returns the new generation.
    pub fn replace_tree(&self, tree: impl Into<Arc<PermissionTree>>) -> u64 {
        let tree = tree.into();
        let mut state = self.inner.state.write();
        state.tree = Some(tree);
        state.generation += 1;
        debug!(generation = state.generation, "permission tree replaced");
        state.generation
    }

    /// Decode a permission payload leniently and install it.
    pub fn replace_from_json(&self, json: &str) -> u64 {
        self.replace_tree(PermissionTree::from_json_lenient(json))
    }

    /// Discard the tree and its navigation (logout, failed re-auth).
    pub fn clear(&self) -> u64 {
        let mut state = self.inner.state.write();
        state.tree = None;
        state.memo = None;
        state.generation += 1;
        info!(
            generation = state.generation,
            "permission tree cleared, navigation reverted to baseline"
        );
        state.generation
    }

    /// Current permission snapshot, if any.
    pub fn tree(&self) -> Option<Arc<PermissionTree>> {
        self.inner.state.read().tree.clone()
    }

    /// Number of replacements and clears so far.
    pub fn generation(&self) -> u64 {
        self.inner.state.read().generation
    }

    pub fn limits(&self) -> FlattenLimits {
        self.inner.limits
    }

    /// Navigation for the current snapshot, computed at most once per
    /// snapshot.
    pub fn navigation(&self) -> Arc<Navigation> {
        if let Some(navigation) = self.inner.state.read().cached() {
            return navigation;
        }

        let mut state = self.inner.state.write();
        if let Some(navigation) = state.cached() {
            return navigation;
        }

        let navigation = Arc::new(match &state.tree {
            Some(tree) => Navigation::resolve(tree, self.inner.limits),
            None => Navigation::baseline(),
        });
        debug!(
            generation = state.generation,
            tab_bar = navigation.tab_bar.len(),
            quick_access = navigation.quick_access.len(),
            "navigation recomputed"
        );

        state.memo = Some(Memo {
            tree: state.tree.clone(),
            navigation: Arc::clone(&navigation),
        });
        navigation
    }
}

impl Default for NavigationSession {
    fn default() -> Self {
        Self::new(FlattenLimits::default())
    }
}

impl std::fmt::Debug for NavigationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("NavigationSession")
            .field("limits", &self.inner.limits)
            .field("generation", &state.generation)
            .field("has_tree", &state.tree.is_some())
            .finish()
    }
}
