//! Legenda - image captioning with Portuguese translation
//!
//! This is the library interface for Legenda, exposing the session
//! authenticator, the inference clients and the HTTP server for
//! programmatic use.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod inference;

pub use config::Config;
pub use error::Error;
