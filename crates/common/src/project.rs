//! Project identity resolution
//!
//! Every deployment repository is named `deploy-<project>`. The project
//! identity namespaces the keys of the stack document, so it must be
//! known before any configuration lookup. It is derived once at startup
//! by walking the ambient path upward; there is no fallback.

use std::fmt;
use std::path::Path;

use crate::error::ConfigurationError;

/// Directory name prefix marking the root of a deployment repository.
pub const REPO_PREFIX: &str = "deploy-";

/// The identity token of the enclosing deployment project.
///
/// Namespaces stack-document keys as `<identity>:<field>`. Read-only
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity(String);

impl ProjectIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The document key under which `field` is expected.
    pub fn namespaced_key(&self, field: &str) -> String {
        format!("{}:{field}", self.0)
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the project identity from a starting directory.
///
/// Walks `start` and its ancestors until a component name begins with
/// [`REPO_PREFIX`], then returns the remainder after the prefix. Only
/// directory names are inspected; no file content is read.
///
/// # Errors
/// Returns [`ConfigurationError::IdentityResolution`] when the
/// filesystem root is reached without a match, or when the matching
/// directory has nothing after the prefix. An empty identity token is
/// never returned.
pub fn resolve_project_identity(start: &Path) -> Result<ProjectIdentity, ConfigurationError> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if let Some(name) = dir.file_name().and_then(|name| name.to_str()) {
            if let Some(identity) = name.strip_prefix(REPO_PREFIX) {
                if !identity.is_empty() {
                    return Ok(ProjectIdentity(identity.to_string()));
                }
            }
        }
        current = dir.parent();
    }

    Err(ConfigurationError::IdentityResolution {
        start: start.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_direct_match() {
        let identity = resolve_project_identity(Path::new("/srv/deploy-paperless")).unwrap();
        assert_eq!(identity.as_str(), "paperless");
    }

    #[test]
    fn test_identity_from_nested_subdirectory() {
        let identity =
            resolve_project_identity(Path::new("/home/user/deploy-paperless/sub")).unwrap();
        assert_eq!(identity.as_str(), "paperless");
        assert_eq!(identity.namespaced_key("redis"), "paperless:redis");
    }

    #[test]
    fn test_no_matching_ancestor_fails() {
        let err = resolve_project_identity(Path::new("/home/user/otherdir")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::IdentityResolution { .. }
        ));
    }

    #[test]
    fn test_bare_prefix_directory_is_not_an_identity() {
        let err = resolve_project_identity(Path::new("/home/user/deploy-/sub")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::IdentityResolution { .. }
        ));
    }
}
