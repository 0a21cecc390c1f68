//! # Paperless Deployment Configuration
//!
//! Configuration resolution layer for the paperless deployment stack.
//! Resolves the project identity from the ambient path, de-aliases the
//! namespaced stack document, validates it into a typed
//! [`ComponentConfig`], and renders the declarative parameters the
//! external provisioning tool consumes.
//!
//! Resolution is a single synchronous pass with no I/O beyond reading
//! directory names and the supplied document. It either succeeds fully
//! or aborts the run; no partially valid configuration is ever exposed.

pub mod config;
pub mod deployment;

pub use config::ComponentConfig;
pub use deployment::{DeploymentParameters, StackOutputs};
