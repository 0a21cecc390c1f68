//! Mail relay configuration

use serde::{Deserialize, Serialize};

use common::secrets::SecretValue;

/// Default submission port for the mail relay.
pub const DEFAULT_MAIL_PORT: u16 = 587;

/// Outbound mail relay credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MailConfig {
    /// Relay hostname
    pub server: String,

    /// Submission port
    #[serde(default = "default_mail_port")]
    pub port: u16,

    /// Relay account username
    pub username: String,

    /// Relay account password, plain or referenced
    pub password: SecretValue,
}

fn default_mail_port() -> u16 {
    DEFAULT_MAIL_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_submission() {
        let config: MailConfig = serde_yaml::from_str(
            "server: smtp.example.com\nusername: paperless\npassword: shh\n",
        )
        .unwrap();
        assert_eq!(config.port, DEFAULT_MAIL_PORT);
        assert_eq!(config.password, SecretValue::plain("shh"));
    }
}
