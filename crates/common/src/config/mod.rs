//! # Configuration Abstractions
//!
//! Untyped stack-document handling and the validation trait shared by
//! typed component configurations.

pub mod document;
pub mod loader;

// Re-export commonly used types
pub use document::*;
pub use loader::*;

use crate::error::DeployError;

/// Common configuration validation trait
///
/// Shape checks happen during extraction; implementations of this trait
/// carry the semantic checks that run after a typed configuration has
/// been constructed.
pub trait ConfigValidation {
    type Error: DeployError;

    /// Validate the configuration
    fn validate(&self) -> Result<(), Self::Error>;

    /// Get configuration warnings (non-fatal issues)
    fn warnings(&self) -> Vec<String> {
        Vec::new()
    }
}
