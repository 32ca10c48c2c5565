//! CLI interface for Legenda

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "legenda")]
#[command(version = "0.1.0")]
#[command(about = "Image captioning and Portuguese translation API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new legenda.toml configuration file
    Init,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides server.host from legenda.toml)
        #[arg(long, env = "LEGENDA_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides server.port from legenda.toml)
        #[arg(short, long, env = "LEGENDA_PORT")]
        port: Option<u16>,
    },
}
