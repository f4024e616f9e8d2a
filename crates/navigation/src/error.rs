//! Navigation error types.

use thiserror::Error;

/// Errors surfaced by the navigation crate.
///
/// Resolution itself never fails; these cover strict decoding and catalog
/// integrity checks.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("failed to decode permission payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::permission::PermissionTree;

    #[test]
    fn strict_decode_failure_is_decode_error() {
        let err = PermissionTree::from_json("{bad").unwrap_err();
        assert!(matches!(err, NavError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode permission payload"));
    }

    #[test]
    fn invalid_catalog_message() {
        let err = NavError::InvalidCatalog("tab-bar: duplicate module key 'home'".into());
        assert_eq!(
            err.to_string(),
            "invalid catalog: tab-bar: duplicate module key 'home'"
        );
    }
}
