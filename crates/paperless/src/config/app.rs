//! Application configuration
//!
//! The application consumes scanned documents from a network share
//! mounted into its pod. The share location is required; the mount
//! options carry a documented default.

use serde::{Deserialize, Serialize};

/// Default mount options for the consume share.
pub const DEFAULT_CONSUME_MOUNT_OPTIONS: &str = "nfsvers=4.1,sec=sys";

/// Paperless application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PaperlessConfig {
    /// Image tag to deploy
    pub version: String,

    /// NFS server exporting the consume share
    pub consume_server: String,

    /// Exported path of the consume share
    pub consume_share: String,

    /// Mount options for the consume share
    #[serde(default = "default_consume_mount_options")]
    pub consume_mount_options: String,
}

fn default_consume_mount_options() -> String {
    DEFAULT_CONSUME_MOUNT_OPTIONS.to_string()
}

impl PaperlessConfig {
    /// Full image reference for the application container.
    pub fn image(&self) -> String {
        format!("ghcr.io/paperless-ngx/paperless-ngx:{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_options_default_applies_only_when_absent() {
        let config: PaperlessConfig = serde_yaml::from_str(
            "version: \"2.11\"\nconsume-server: nfs1\nconsume-share: /export/scan\n",
        )
        .unwrap();
        assert_eq!(config.consume_mount_options, DEFAULT_CONSUME_MOUNT_OPTIONS);

        let config: PaperlessConfig = serde_yaml::from_str(
            "version: \"2.11\"\nconsume-server: nfs1\nconsume-share: /export/scan\nconsume-mount-options: nfsvers=3\n",
        )
        .unwrap();
        assert_eq!(config.consume_mount_options, "nfsvers=3");
    }

    #[test]
    fn test_application_image() {
        let config = PaperlessConfig {
            version: "2.11.2".to_string(),
            consume_server: "nfs1".to_string(),
            consume_share: "/export/scan".to_string(),
            consume_mount_options: default_consume_mount_options(),
        };
        assert_eq!(config.image(), "ghcr.io/paperless-ngx/paperless-ngx:2.11.2");
    }
}
