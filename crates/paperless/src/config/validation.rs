//! Configuration validation implementation
//!
//! Shape checks happen during extraction; everything here is a semantic
//! check on an already well-shaped configuration.

use common::config::ConfigValidation;
use common::error::ConfigurationError;

use super::ComponentConfig;

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigurationError> {
    if value.is_empty() {
        return Err(ConfigurationError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

impl ConfigValidation for ComponentConfig {
    type Error = ConfigurationError;

    fn validate(&self) -> Result<(), Self::Error> {
        require_non_empty("redis.version", &self.redis.version)?;
        require_non_empty("postgres.version", &self.postgres.version)?;
        require_non_empty("tika.version", &self.tika.version)?;
        require_non_empty("gotenberg.version", &self.gotenberg.version)?;
        require_non_empty("paperless.version", &self.paperless.version)?;
        require_non_empty("paperless.consume-server", &self.paperless.consume_server)?;

        if !self.paperless.consume_share.starts_with('/') {
            return Err(ConfigurationError::InvalidValue {
                key: "paperless.consume-share".to_string(),
                value: self.paperless.consume_share.clone(),
                reason: "consume share must be an absolute export path".to_string(),
            });
        }

        if let Some(oidc) = &self.oidc {
            if oidc.providers().is_empty() {
                return Err(ConfigurationError::ValidationFailed {
                    details: "oidc section is present but configures no provider".to_string(),
                });
            }
            for (name, provider) in oidc.providers() {
                require_non_empty(&format!("oidc.{name}.client-id"), &provider.client_id)?;
            }
        }

        if let Some(mail) = &self.mail {
            require_non_empty("mail.server", &mail.server)?;
            require_non_empty("mail.username", &mail.username)?;
            if mail.port == 0 {
                return Err(ConfigurationError::InvalidValue {
                    key: "mail.port".to_string(),
                    value: mail.port.to_string(),
                    reason: "port cannot be zero".to_string(),
                });
            }
        }

        if let Some(cloudflare) = &self.cloudflare {
            require_non_empty("cloudflare.zone", &cloudflare.zone)?;
        }

        Ok(())
    }

    fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.cloudflare.is_none() {
            warnings.push(
                "No reverse-proxy zone configured - the application will only be reachable inside the cluster"
                    .to_string(),
            );
        }

        if self.oidc.is_none() {
            warnings.push("No identity providers configured - social login is disabled".to_string());
        }

        if self.mail.is_none() {
            warnings.push("No mail relay configured - the application cannot send mail".to_string());
        }

        warnings
    }
}
