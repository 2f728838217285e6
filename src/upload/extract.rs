// Multipart extraction for the edit endpoint

use super::models::{validate_image_size, UploadedImage};
use crate::error::{AppError, Result};
use axum::extract::multipart::{Multipart, MultipartError};

/// Field name the browser form uses for the photo.
pub const IMAGE_FIELD: &str = "image";

/// Pull the `image` field out of a multipart body.
///
/// The field must be a file part: plain text values are rejected just like
/// a missing field. Unrelated fields are skipped, so a form that happens to
/// carry extras still works.
pub async fn image_from_multipart(mut multipart: Multipart) -> Result<UploadedImage> {
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // A plain text part arrives with neither filename nor content type.
        // The upstream needs a binary file, so reject those up front.
        if field.file_name().is_none() && field.content_type().is_none() {
            return Err(AppError::InvalidRequest(
                "The 'image' field must be a file upload, not a text value".to_string(),
            ));
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(bad_multipart)?;

        if bytes.is_empty() {
            return Err(AppError::InvalidRequest(
                "Uploaded 'image' file is empty".to_string(),
            ));
        }
        validate_image_size(bytes.len()).map_err(AppError::InvalidRequest)?;

        return Ok(UploadedImage::new(
            filename.as_deref(),
            content_type.as_deref(),
            bytes,
        ));
    }

    Err(AppError::InvalidRequest(
        "Missing file field 'image'".to_string(),
    ))
}

fn bad_multipart(err: MultipartError) -> AppError {
    AppError::InvalidRequest(format!("Malformed multipart request: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::models::{DEFAULT_CONTENT_TYPE, DEFAULT_FILENAME};
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request, StatusCode};

    const BOUNDARY: &str = "x-blazerize-test-boundary";

    async fn multipart_from(body: Vec<u8>) -> Multipart {
        let request = Request::builder()
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        Multipart::from_request(request, &()).await.unwrap()
    }

    fn part(name: &str, filename: Option<&str>, content_type: Option<&str>, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(fname) => bytes.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{fname}\"\r\n")
                    .as_bytes(),
            ),
            None => bytes.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
            ),
        }
        if let Some(ct) = content_type {
            bytes.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(data);
        bytes.extend_from_slice(b"\r\n");
        bytes
    }

    fn finish(mut body: Vec<u8>) -> Vec<u8> {
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[tokio::test]
    async fn extracts_declared_file() {
        let body = finish(part("image", Some("selfie.jpg"), Some("image/jpeg"), b"jpeg-bytes"));
        let image = image_from_multipart(multipart_from(body).await).await.unwrap();
        assert_eq!(image.filename, "selfie.jpg");
        assert_eq!(image.content_type, "image/jpeg");
        assert_eq!(&image.bytes[..], b"jpeg-bytes");
    }

    #[tokio::test]
    async fn defaults_blank_filename() {
        let body = finish(part("image", Some(""), Some("image/png"), b"png-bytes"));
        let image = image_from_multipart(multipart_from(body).await).await.unwrap();
        assert_eq!(image.filename, DEFAULT_FILENAME);
    }

    #[tokio::test]
    async fn defaults_missing_content_type_to_png() {
        let body = finish(part("image", Some("photo"), None, b"bytes"));
        let image = image_from_multipart(multipart_from(body).await).await.unwrap();
        assert_eq!(image.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn skips_unrelated_fields() {
        let mut body = part("note", None, None, b"hello");
        body.extend_from_slice(&part("image", Some("a.png"), Some("image/png"), b"img"));
        let image = image_from_multipart(multipart_from(finish(body)).await)
            .await
            .unwrap();
        assert_eq!(image.filename, "a.png");
    }

    #[tokio::test]
    async fn rejects_text_valued_image_field() {
        let body = finish(part("image", None, None, b"just some text"));
        let err = image_from_multipart(multipart_from(body).await)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_missing_image_field() {
        let body = finish(part("other", Some("a.png"), Some("image/png"), b"img"));
        let err = image_from_multipart(multipart_from(body).await)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("image"));
    }

    #[tokio::test]
    async fn rejects_empty_file() {
        let body = finish(part("image", Some("empty.png"), Some("image/png"), b""));
        let err = image_from_multipart(multipart_from(body).await)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
