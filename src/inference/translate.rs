//! Client for the translation service

use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct TranslateRequest {
    text: String,
    max_length: usize,
}

#[derive(Debug, Deserialize)]
struct TranslateReply {
    translation: String,
}

/// HTTP client for the translation model server. The target language is
/// selected with an inline marker (e.g. ">>pob<<") prepended to the text,
/// as Opus-MT multilingual models expect.
#[derive(Clone)]
pub struct TranslationClient {
    http_client: Client,
    base_url: String,
    target_language: String,
    max_length: usize,
}

impl TranslationClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.translation_url.trim_end_matches('/').to_string(),
            target_language: config.target_language.clone(),
            max_length: config.max_length,
        })
    }

    /// Translate English text into the configured target language
    pub async fn translate(&self, text: &str) -> Result<String> {
        let url = format!("{}/v1/translate", self.base_url);
        let request = TranslateRequest {
            text: mark_target(&self.target_language, text),
            max_length: self.max_length,
        };

        debug!("Requesting translation from {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Translation request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Inference(format!(
                "Translation service returned HTTP {}",
                response.status()
            )));
        }

        let reply: TranslateReply = response.json().await.map_err(|e| {
            Error::Inference(format!("Failed to parse translation response: {}", e))
        })?;

        Ok(reply.translation)
    }
}

/// Prepend the target-language marker understood by the model
fn mark_target(language: &str, text: &str) -> String {
    format!(">>{}<< {}", language, text)
}
