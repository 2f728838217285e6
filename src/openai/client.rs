// OpenAI images/edits client

use super::{ImagesResponse, EDIT_PROMPT, EDIT_SIZE};
use crate::config::OpenAiConfig;
use crate::error::{AppError, Result};
use crate::upload::UploadedImage;
use crate::utils::logging::sanitize;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the OpenAI images API.
///
/// Holds the pooled HTTP client and the upstream settings. One instance is
/// shared across all requests; it carries no per-request state.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client, tuned for a handful of long-running upstream
    /// calls rather than high fan-out.
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Whether an upstream credential is configured. The edit handler checks
    /// this before touching the request body.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one photo to the images/edits endpoint and return the decoded
    /// bytes of the single edited result.
    ///
    /// No retries: every failure surfaces to the caller on the first
    /// attempt, carrying the most specific message the upstream offered.
    pub async fn edit_image(&self, image: &UploadedImage) -> Result<Vec<u8>> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::Config("OPENAI_API_KEY is not set in the server environment".to_string())
        })?;

        let url = format!(
            "{}/images/edits",
            self.config.api_base_url.trim_end_matches('/')
        );
        debug!("Calling images/edits for model: {}", self.config.model);

        let image_part = Part::bytes(image.bytes.to_vec())
            .file_name(image.filename.clone())
            .mime_str(&image.content_type)
            .map_err(|e| {
                AppError::InvalidRequest(format!(
                    "Unusable image content type '{}': {}",
                    image.content_type, e
                ))
            })?;

        let form = Form::new()
            .text("model", self.config.model.clone())
            .text("prompt", EDIT_PROMPT)
            .text("size", EDIT_SIZE)
            .text("n", "1")
            .part("image", image_part);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "OpenAI API error: HTTP {} - Response body: {}",
                status,
                sanitize(&error_text)
            );
            let message = Self::extract_error_message(&error_text).unwrap_or_else(|| {
                if error_text.trim().is_empty() {
                    format!("Upstream service returned HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, error_text)
                }
            });
            return Err(AppError::UpstreamApi(message));
        }

        let response_text = response.text().await?;
        let images: ImagesResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse OpenAI response: {}", e);
            AppError::UpstreamApi(format!("Response parsing error: {}", e))
        })?;

        let b64 = images
            .data
            .into_iter()
            .next()
            .and_then(|datum| datum.b64_json)
            .ok_or(AppError::MissingEditedImage)?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64.as_bytes())
            .map_err(|e| AppError::UpstreamApi(format!("Invalid base64 image data: {}", e)))?;

        debug!("Received edited image ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Extract the most specific human-readable message from an OpenAI error
    /// payload, falling back through progressively more generic fields.
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            #[serde(rename = "type")]
            kind: Option<String>,
            code: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.kind).or(error.code);
            }
        }
        None
    }
}
