//! Reverse-proxy zone configuration
//!
//! When a zone is configured the application is published behind the
//! reverse proxy at `paperless.<zone>` and a DNS record is declared for
//! it. The section is optional: some deployment revisions expose the
//! application only inside the cluster.

use serde::{Deserialize, Serialize};

use common::secrets::SecretValue;

/// DNS zone for the reverse proxy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CloudflareConfig {
    /// Zone the application hostname lives under
    pub zone: String,

    /// API token for record management, plain or referenced
    #[serde(default)]
    pub api_token: Option<SecretValue>,
}

impl CloudflareConfig {
    /// Externally reachable hostname of the application.
    pub fn app_hostname(&self) -> String {
        format!("paperless.{}", self.zone)
    }
}
