//! Configuration for the paperless deployment
//!
//! Each module handles one subsystem of the stack; [`ComponentConfig`]
//! aggregates them and is the only object downstream code sees. It is
//! immutable once resolved.

pub mod app;
pub mod dns;
pub mod mail;
pub mod oidc;
pub mod services;
pub mod validation;

// Re-exports for convenience
pub use app::PaperlessConfig;
pub use dns::CloudflareConfig;
pub use mail::MailConfig;
pub use oidc::{OidcConfig, OidcProviderConfig};
pub use services::{GotenbergConfig, PostgresConfig, RedisConfig, TikaConfig};

use serde::{Deserialize, Serialize};

use common::config::{loader, ConfigDocument};
use common::error::ConfigurationError;
use common::project::ProjectIdentity;
use common::secrets::SecretValue;

/// Root configuration of the paperless deployment.
///
/// Every field is resolved from the stack document under the key
/// `<identity>:<field>`. Required sections fail resolution atomically
/// when absent or mistyped; optional sections widen the deployment
/// (reverse proxy, mail relay, social login) and only produce warnings
/// when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Cluster credentials handed to the provisioning tool
    pub kubeconfig: SecretValue,

    /// Cache service
    pub redis: RedisConfig,

    /// External relational database
    pub postgres: PostgresConfig,

    /// Text extraction service
    pub tika: TikaConfig,

    /// Document conversion service
    pub gotenberg: GotenbergConfig,

    /// The application itself, including the consume share mount
    pub paperless: PaperlessConfig,

    /// Social login providers
    #[serde(default)]
    pub oidc: Option<OidcConfig>,

    /// Outbound mail relay
    #[serde(default)]
    pub mail: Option<MailConfig>,

    /// Reverse-proxy DNS zone
    #[serde(default)]
    pub cloudflare: Option<CloudflareConfig>,
}

impl ComponentConfig {
    /// Resolve the typed configuration from a stack document.
    ///
    /// De-aliases the document for `project`, then extracts and
    /// shape-checks every declared section. Deterministic: identical
    /// inputs always produce identical output or identical failure.
    ///
    /// # Errors
    /// * [`ConfigurationError::MissingField`] naming the dotted path of
    ///   an absent required field
    /// * [`ConfigurationError::TypeMismatch`] when a field has the wrong
    ///   shape
    /// * [`ConfigurationError::SecretFormat`] when a credential is
    ///   neither a plain string nor a `{ref: ...}` reference
    pub fn resolve(
        document: &ConfigDocument,
        project: &ProjectIdentity,
    ) -> Result<Self, ConfigurationError> {
        let section = document.namespaced_section(project);
        loader::extract_section(section)
    }
}
