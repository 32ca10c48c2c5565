//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub inference: InferenceConfig,
}

impl Config {
    /// Reject configurations that would silently run without credentials.
    pub fn validate(&self) -> Result<()> {
        if self.auth.secret.is_empty() {
            return Err(Error::Config(
                "auth.secret is empty; set JWT_SECRET".to_string(),
            ));
        }
        if self.auth.username.is_empty() {
            return Err(Error::Config(
                "auth.username is empty; set AUTH_USERNAME".to_string(),
            ));
        }
        if self.auth.password.is_empty() {
            return Err(Error::Config(
                "auth.password is empty; set AUTH_PASSWORD".to_string(),
            ));
        }
        Ok(())
    }
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted upload body size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    1024 * 1024 * 20
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify session tokens
    #[serde(default)]
    pub secret: String,

    /// The single username allowed to log in
    #[serde(default)]
    pub username: String,

    /// Password for that username
    #[serde(default)]
    pub password: String,

    /// Token lifetime in minutes
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_token_ttl_minutes() -> i64 {
    60
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            username: String::new(),
            password: String::new(),
            token_ttl_minutes: default_token_ttl_minutes(),
        }
    }
}

/// Endpoints and knobs for the two inference collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_caption_url")]
    pub caption_url: String,

    #[serde(default = "default_translation_url")]
    pub translation_url: String,

    /// Target-language marker prepended to translation requests
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Maximum generated translation length
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Maximum number of images accepted per batch request
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,

    /// Timeout for each inference request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_caption_url() -> String {
    "http://127.0.0.1:9100".to_string()
}

fn default_translation_url() -> String {
    "http://127.0.0.1:9200".to_string()
}

fn default_target_language() -> String {
    "pob".to_string()
}

fn default_max_length() -> usize {
    512
}

fn default_batch_limit() -> usize {
    4
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            caption_url: default_caption_url(),
            translation_url: default_translation_url(),
            target_language: default_target_language(),
            max_length: default_max_length(),
            batch_limit: default_batch_limit(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
