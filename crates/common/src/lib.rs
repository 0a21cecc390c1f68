//! # Deployment Common
//!
//! Shared building blocks for the paperless deployment stack: the error
//! taxonomy, the secret-holding value type, project identity resolution,
//! and untyped stack-document loading.
//!
//! ## Design Principles
//! - Configuration resolution is a one-shot, synchronous gate: it either
//!   yields a fully valid typed configuration or a fatal diagnostic
//! - Secrets never appear in rendered or logged output without an
//!   explicit unwrap
//! - Strong typing with validation logic at the seams

pub mod config;
pub mod error;
pub mod project;
pub mod secrets;

// Re-export commonly used types at the crate root for convenience
pub use config::*;
pub use error::*;
pub use project::*;
pub use secrets::*;

/// Version of the common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
