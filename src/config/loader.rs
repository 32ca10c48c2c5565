//! Configuration loading and environment variable interpolation

use crate::error::Result;
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "legenda.toml";

/// Load configuration from legenda.toml, falling back to the built-in
/// defaults (which pull the secrets from the environment) when no file exists.
pub fn load_config() -> Result<Config> {
    let content = match find_config_file() {
        Some(path) => fs::read_to_string(path)?,
        None => default_config_content().to_string(),
    };
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Option<std::path::PathBuf> {
    let mut current = env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Legenda Configuration

[server]
host = "0.0.0.0"
port = 8000
# max_upload_bytes = 20971520

[auth]
secret = "${JWT_SECRET}"
username = "${AUTH_USERNAME}"
password = "${AUTH_PASSWORD}"
token_ttl_minutes = 60

[inference]
caption_url = "${CAPTION_URL:-http://127.0.0.1:9100}"
translation_url = "${TRANSLATION_URL:-http://127.0.0.1:9200}"
target_language = "pob"
max_length = 512
batch_limit = 4
request_timeout_secs = 120
"#
}
