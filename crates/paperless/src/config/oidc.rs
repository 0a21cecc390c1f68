//! Social login configuration
//!
//! The application delegates sign-in to up to two identity providers.
//! Client secrets normalize into [`SecretValue`] and are only exposed
//! when the provider map for the application environment is rendered.

use serde::{Deserialize, Serialize};

use common::secrets::SecretValue;

/// Credentials for one identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OidcProviderConfig {
    /// OAuth client id issued by the provider
    pub client_id: String,

    /// OAuth client secret, plain or referenced
    pub client_secret: SecretValue,
}

/// Identity provider wiring for social login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OidcConfig {
    /// Google sign-in
    #[serde(default)]
    pub google: Option<OidcProviderConfig>,

    /// GitHub sign-in
    #[serde(default)]
    pub github: Option<OidcProviderConfig>,
}

impl OidcConfig {
    /// Configured providers with their allauth provider names.
    pub fn providers(&self) -> Vec<(&'static str, &OidcProviderConfig)> {
        let mut providers = Vec::new();
        if let Some(google) = &self.google {
            providers.push(("google", google));
        }
        if let Some(github) = &self.github {
            providers.push(("github", github));
        }
        providers
    }
}
