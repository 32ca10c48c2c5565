//! Client for the image captioning service

use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct CaptionRequest {
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CaptionReply {
    captions: Vec<String>,
}

/// HTTP client for the captioning model server. Images are shipped as
/// base64 in a JSON body; the service answers with one English caption
/// per image, in order.
#[derive(Clone)]
pub struct CaptionClient {
    http_client: Client,
    base_url: String,
}

impl CaptionClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.caption_url.trim_end_matches('/').to_string(),
        })
    }

    /// Caption a single image
    pub async fn caption(&self, image: &[u8]) -> Result<String> {
        let mut captions = self.caption_batch(&[image]).await?;
        captions
            .pop()
            .ok_or_else(|| Error::Inference("caption service returned no caption".to_string()))
    }

    /// Caption a batch of images, one caption per image in order
    pub async fn caption_batch<B: AsRef<[u8]>>(&self, images: &[B]) -> Result<Vec<String>> {
        let url = format!("{}/v1/caption", self.base_url);
        let request = CaptionRequest {
            images: images
                .iter()
                .map(|image| STANDARD.encode(image.as_ref()))
                .collect(),
        };

        debug!("Requesting {} caption(s) from {}", images.len(), url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Caption request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Inference(format!(
                "Caption service returned HTTP {}",
                response.status()
            )));
        }

        let reply: CaptionReply = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse caption response: {}", e)))?;

        if reply.captions.len() != images.len() {
            return Err(Error::Inference(format!(
                "Caption service returned {} captions for {} images",
                reply.captions.len(),
                images.len()
            )));
        }

        Ok(reply.captions)
    }
}
