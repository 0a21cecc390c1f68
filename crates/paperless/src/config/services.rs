//! Supporting service configuration
//!
//! The cache, database, text-extraction, and document-conversion
//! services are each pinned to an image version by the stack document.

use serde::{Deserialize, Serialize};

/// Cache service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Image tag to deploy
    pub version: String,
}

impl RedisConfig {
    /// Full image reference for the cache container.
    pub fn image(&self) -> String {
        format!("docker.io/library/redis:{}", self.version)
    }
}

/// External relational database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// Image tag to deploy
    pub version: String,
}

impl PostgresConfig {
    /// Full image reference for the database container.
    pub fn image(&self) -> String {
        format!("docker.io/library/postgres:{}", self.version)
    }
}

/// Text-extraction service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikaConfig {
    /// Image tag to deploy
    pub version: String,
}

impl TikaConfig {
    /// Full image reference for the text-extraction container.
    pub fn image(&self) -> String {
        format!("docker.io/apache/tika:{}", self.version)
    }
}

/// Document-conversion service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotenbergConfig {
    /// Image tag to deploy
    pub version: String,
}

impl GotenbergConfig {
    /// Full image reference for the document-conversion container.
    pub fn image(&self) -> String {
        format!("docker.io/gotenberg/gotenberg:{}", self.version)
    }
}
