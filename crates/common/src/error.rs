//! Error handling for the deployment stack
//!
//! This module defines the error infrastructure used throughout the
//! configuration resolution layer. It provides:
//! - `DeployError` trait for consistent error handling
//! - `ConfigurationError` covering every way resolution can fail
//! - Integration with `thiserror` for ergonomic error handling
//!
//! # Design Principles
//! - All errors implement Send + Sync
//! - Use thiserror for library errors, anyhow for the entry point
//! - Every error names the offending field or path
//! - Errors are fatal to the resolution run; none are retried

use thiserror::Error;

/// Base trait for all deployment-stack errors
///
/// Ensures all errors are thread-safe, `'static`, and implement the
/// standard `Error` trait.
pub trait DeployError: std::error::Error + Send + Sync + 'static {}

/// Configuration-related errors
///
/// These errors occur during identity resolution, stack-document loading,
/// typed extraction, or semantic validation. All of them abort the run:
/// configuration resolution has no transient or partial failure modes.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// No enclosing project directory was found
    #[error("No enclosing project directory (expected a `deploy-*` ancestor of {start})")]
    IdentityResolution { start: String },

    /// Stack document not found
    #[error("Stack document not found: {path}")]
    FileNotFound { path: String },

    /// Stack document cannot be read
    #[error("Cannot read stack document {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stack document parsing failed
    #[error("Failed to parse stack document: {details}")]
    ParseError { details: String },

    /// A required configuration field is absent
    #[error("Missing required configuration field: {path}")]
    MissingField { path: String },

    /// A field is present but has the wrong shape
    #[error("Type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A credential field is neither a plain string nor a secret reference
    #[error("Invalid secret at {path}: {details}")]
    SecretFormat { path: String, details: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {details}")]
    ValidationFailed { details: String },
}

impl DeployError for ConfigurationError {}
