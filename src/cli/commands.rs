//! CLI command implementations

use anyhow::Result;
use std::path::Path;

use crate::api;
use crate::config::{self, ServerConfig};

/// Write a default legenda.toml in the current directory
pub async fn init() -> Result<()> {
    let path = Path::new("legenda.toml");
    if path.exists() {
        anyhow::bail!("legenda.toml already exists");
    }

    std::fs::write(path, config::default_config_content())?;
    println!("Created legenda.toml");
    println!("Set JWT_SECRET, AUTH_USERNAME and AUTH_PASSWORD before serving.");
    Ok(())
}

/// Load configuration and run the HTTP server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = config::load_config()?;
    let (host, port) = resolve_bind(&config.server, host, port);
    api::run_server(config, &host, port).await?;
    Ok(())
}

/// CLI flags win over the configured bind address
fn resolve_bind(server: &ServerConfig, host: Option<String>, port: Option<u16>) -> (String, u16) {
    (
        host.unwrap_or_else(|| server.host.clone()),
        port.unwrap_or(server.port),
    )
}
