// OpenAI image API client module

mod client;

pub use client::OpenAiClient;

use serde::Deserialize;

/// Fixed editing instruction forwarded with every upload.
pub const EDIT_PROMPT: &str = "add an orange blazer, white shirt, black tie; change nothing else";

/// Fixed output resolution requested from the edit endpoint.
pub const EDIT_SIZE: &str = "1024x1024";

/// Response payload of `POST /images/edits`.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

/// One generated result. `gpt-image-1` always returns base64 payloads,
/// so anything without `b64_json` counts as "no usable image".
#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    #[serde(default)]
    pub b64_json: Option<String>,
}
