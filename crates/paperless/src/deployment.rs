//! Declarative deployment parameters
//!
//! The resolved configuration parameterizes the external provisioning
//! tool: container images, the application environment map, the consume
//! volume attributes, and the exposed stack outputs. This is the only
//! place secret values are unwrapped.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use common::secrets::SecretValue;

use crate::config::ComponentConfig;

pub const REDIS_PORT: u16 = 6379;
pub const POSTGRES_PORT: u16 = 5432;
pub const PAPERLESS_PORT: u16 = 8000;
pub const TIKA_PORT: u16 = 9998;
pub const GOTENBERG_PORT: u16 = 3000;

/// Administrative account created inside the application.
pub const ADMIN_USERNAME: &str = "admin";

/// Container images the stack deploys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Images {
    pub redis: String,
    pub postgres: String,
    pub tika: String,
    pub gotenberg: String,
    pub paperless: String,
}

/// CSI volume attributes of the consume share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumeVolume {
    pub server: String,
    pub share: String,
    pub mount_options: String,
}

/// Everything the provisioning tool needs to declare the stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentParameters {
    pub images: Images,
    pub env: BTreeMap<String, String>,
    pub consume_volume: ConsumeVolume,
    /// Hostname behind the reverse proxy, when a zone is configured
    pub hostname: Option<String>,
}

/// Named outputs surfaced to operators after provisioning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackOutputs {
    pub admin_username: String,
    pub admin_password: SecretValue,
    pub paperless_url: String,
}

impl DeploymentParameters {
    /// Render the parameters from a resolved configuration.
    pub fn from_config(config: &ComponentConfig) -> Self {
        let hostname = config
            .cloudflare
            .as_ref()
            .map(|cloudflare| cloudflare.app_hostname());

        Self {
            images: Images {
                redis: config.redis.image(),
                postgres: config.postgres.image(),
                tika: config.tika.image(),
                gotenberg: config.gotenberg.image(),
                paperless: config.paperless.image(),
            },
            env: application_env(config, hostname.as_deref()),
            consume_volume: ConsumeVolume {
                server: config.paperless.consume_server.clone(),
                share: config.paperless.consume_share.clone(),
                mount_options: config.paperless.consume_mount_options.clone(),
            },
            hostname,
        }
    }

    /// Externally reachable address of the application.
    ///
    /// Behind the reverse proxy when a zone is configured; the
    /// cluster-local service address otherwise.
    pub fn paperless_url(&self) -> String {
        match &self.hostname {
            Some(hostname) => format!("https://{hostname}"),
            None => format!("http://paperless:{PAPERLESS_PORT}"),
        }
    }

    /// Package the operator-facing outputs.
    ///
    /// The administrative password is generated by the provisioning
    /// tool's secret generator and passed through untouched.
    pub fn stack_outputs(&self, admin_password: SecretValue) -> StackOutputs {
        StackOutputs {
            admin_username: ADMIN_USERNAME.to_string(),
            admin_password,
            paperless_url: self.paperless_url(),
        }
    }
}

/// Build the application environment map.
///
/// Secret values are exposed here and nowhere else: the map is handed
/// directly to the provisioning tool.
fn application_env(config: &ComponentConfig, hostname: Option<&str>) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();

    env.insert(
        "PAPERLESS_REDIS".to_string(),
        format!("redis://redis:{REDIS_PORT}"),
    );
    env.insert("PAPERLESS_DBHOST".to_string(), "postgres".to_string());
    env.insert("PAPERLESS_DBPORT".to_string(), POSTGRES_PORT.to_string());

    env.insert("PAPERLESS_CONSUMER_POLLING".to_string(), "30".to_string());
    // The scanner rewrites its PDFs a few times after each page; give
    // the consumer time to see a settled file.
    env.insert(
        "PAPERLESS_CONSUMER_POLLING_DELAY".to_string(),
        "30".to_string(),
    );
    env.insert("PAPERLESS_TASK_WORKERS".to_string(), "4".to_string());
    env.insert("PAPERLESS_THREADS_PER_WORKER".to_string(), "4".to_string());

    env.insert("PAPERLESS_TIKA_ENABLED".to_string(), "1".to_string());
    env.insert(
        "PAPERLESS_TIKA_ENDPOINT".to_string(),
        format!("http://tika:{TIKA_PORT}"),
    );
    env.insert(
        "PAPERLESS_TIKA_GOTENBERG_ENDPOINT".to_string(),
        format!("http://gotenberg:{GOTENBERG_PORT}"),
    );

    env.insert(
        "PAPERLESS_ADMIN_USER".to_string(),
        ADMIN_USERNAME.to_string(),
    );

    if let Some(hostname) = hostname {
        env.insert("PAPERLESS_URL".to_string(), format!("https://{hostname}"));
    }

    if let Some(oidc) = &config.oidc {
        let providers = oidc.providers();
        let apps: Vec<String> = providers
            .iter()
            .map(|(name, _)| format!("allauth.socialaccount.providers.{name}"))
            .collect();
        env.insert("PAPERLESS_APPS".to_string(), apps.join(","));

        let mut provider_map = serde_json::Map::new();
        for (name, provider) in providers {
            provider_map.insert(
                name.to_string(),
                json!({
                    "APPS": [{
                        "client_id": provider.client_id,
                        "secret": provider.client_secret.expose(),
                    }],
                }),
            );
        }
        env.insert(
            "PAPERLESS_SOCIALACCOUNT_PROVIDERS".to_string(),
            serde_json::Value::Object(provider_map).to_string(),
        );
    }

    if let Some(mail) = &config.mail {
        env.insert("PAPERLESS_EMAIL_HOST".to_string(), mail.server.clone());
        env.insert("PAPERLESS_EMAIL_PORT".to_string(), mail.port.to_string());
        env.insert(
            "PAPERLESS_EMAIL_HOST_USER".to_string(),
            mail.username.clone(),
        );
        env.insert(
            "PAPERLESS_EMAIL_HOST_PASSWORD".to_string(),
            mail.password.expose().to_string(),
        );
        env.insert("PAPERLESS_EMAIL_USE_TLS".to_string(), "true".to_string());
    }

    env
}
