//! HTTP API server

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{self, Authenticator};
use crate::config::Config;
use crate::error::Result;
use crate::inference::{CaptionClient, TranslationClient};

use super::routes;

/// Application state shared across handlers. Everything here is immutable
/// after startup, so handlers can run in parallel without locking.
pub struct AppState {
    pub config: Config,
    pub authenticator: Arc<Authenticator>,
    pub captioner: CaptionClient,
    pub translator: TranslationClient,
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let authenticator = Arc::new(Authenticator::new(&config.auth));
    let captioner = CaptionClient::new(&config.inference)?;
    let translator = TranslationClient::new(&config.inference)?;

    let state = Arc::new(AppState {
        config,
        authenticator,
        captioner,
        translator,
    });

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
fn create_router(state: SharedState) -> Router {
    // Everything except login and health requires a valid bearer token
    let protected = Router::new()
        .route("/caption", post(routes::caption))
        .route("/batchcaption", post(routes::batch_caption))
        .route("/translate", post(routes::translate))
        .layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/login", post(routes::login))
        .route("/api/health", get(routes::health))
        .merge(protected)
        // Middleware
        .layer(DefaultBodyLimit::max(state.config.server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
