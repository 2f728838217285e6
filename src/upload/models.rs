// Uploaded image entity and validation limits

use bytes::Bytes;

/// Filename substituted when the browser supplies none (or a blank one).
pub const DEFAULT_FILENAME: &str = "input.png";

/// Content type assumed when the upload does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Validation limits
pub const MAX_IMAGE_SIZE_BYTES: usize = 25 * 1024 * 1024; // 25MB (gpt-image-1 input limit)

/// A single uploaded photo, alive for the duration of one request.
///
/// The bytes are forwarded to the upstream client and dropped when the
/// request completes; nothing is persisted anywhere.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedImage {
    /// Assemble an upload, substituting defaults for a blank filename or a
    /// missing content type.
    pub fn new(filename: Option<&str>, content_type: Option<&str>, bytes: Bytes) -> Self {
        let filename = filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Self {
            filename,
            content_type,
            bytes,
        }
    }
}

/// Validate image data size
pub fn validate_image_size(data_len: usize) -> Result<(), String> {
    if data_len > MAX_IMAGE_SIZE_BYTES {
        return Err(format!(
            "Image size {} bytes exceeds maximum of {} bytes (25MB)",
            data_len, MAX_IMAGE_SIZE_BYTES
        ));
    }
    Ok(())
}
