//! API route handlers

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};

use super::server::SharedState;
use crate::auth::{LoginRequest, LoginResponse};
use crate::error::{Error, Result};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CaptionResult {
    pub original: String,
    pub translated: String,
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// Session routes

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let token = state.authenticator.login(&req.username, &req.password)?;
    Ok(Json(LoginResponse::bearer(token)))
}

// Captioning routes

pub async fn caption(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<CaptionResult>> {
    let mut images = collect_images(multipart, 1).await?;
    let image = images
        .pop()
        .ok_or_else(|| Error::BadRequest("Missing file".to_string()))?;

    let original = state.captioner.caption(&image).await?;
    let translated = state.translator.translate(&original).await?;

    Ok(Json(CaptionResult {
        original,
        translated,
    }))
}

pub async fn batch_caption(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<Vec<CaptionResult>>> {
    let limit = state.config.inference.batch_limit;
    let images = collect_images(multipart, limit).await?;
    if images.is_empty() {
        return Err(Error::BadRequest("Missing files".to_string()));
    }

    let originals = state.captioner.caption_batch(&images).await?;

    // Captions come back in one batch; translations fan out concurrently
    let results = try_join_all(originals.into_iter().map(|original| {
        let state = state.clone();
        async move {
            let translated = state.translator.translate(&original).await?;
            Ok::<_, Error>(CaptionResult {
                original,
                translated,
            })
        }
    }))
    .await?;

    Ok(Json(results))
}

pub async fn translate(
    State(state): State<SharedState>,
    Json(req): Json<TranslationRequest>,
) -> Result<Json<CaptionResult>> {
    let translated = state.translator.translate(&req.text).await?;
    Ok(Json(CaptionResult {
        original: req.text,
        translated,
    }))
}

/// Read uploaded file fields from a multipart body, keeping at most `limit`
/// images. Extra files beyond the limit are dropped rather than rejected.
async fn collect_images(mut multipart: Multipart, limit: usize) -> Result<Vec<Bytes>> {
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field
            .name()
            .ok_or_else(|| Error::BadRequest("Form field missing name".to_string()))?;
        match name {
            // Fields past the limit are skipped without buffering their bytes
            "file" | "files" if images.len() < limit => {
                let bytes = field.bytes().await?;
                images.push(bytes);
            }
            _ => {}
        }
    }

    Ok(images)
}
