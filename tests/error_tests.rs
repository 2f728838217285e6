// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use blazerize::error::AppError;
use http_body_util::BodyExt;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        AppError::Config("Missing credential".to_string()),
        AppError::InvalidRequest("Bad request".to_string()),
        AppError::UpstreamApi("API error".to_string()),
        AppError::MissingEditedImage,
        AppError::Internal("Something broke".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_invalid_request_error() {
    let error = AppError::InvalidRequest("Missing file field 'image'".to_string());
    assert!(format!("{}", error).contains("Missing file field 'image'"));
}

#[test]
fn test_upstream_error_displays_message_verbatim() {
    let error = AppError::UpstreamApi("Invalid image format".to_string());
    assert_eq!(format!("{}", error), "Invalid image format");
}

#[test]
fn test_missing_edited_image_message() {
    let error = AppError::MissingEditedImage;
    assert_eq!(
        format!("{}", error),
        "No edited image received from the upstream service"
    );
}

#[test]
fn test_config_error_message() {
    let error = AppError::Config("OPENAI_API_KEY is not set".to_string());
    assert!(format!("{}", error).contains("OPENAI_API_KEY is not set"));
}

#[test]
fn test_status_codes() {
    assert_eq!(
        AppError::InvalidRequest("bad".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Config("missing".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::UpstreamApi("boom".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::MissingEditedImage.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_response_body_shape() {
    let response = AppError::UpstreamApi("Invalid image format".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["error"], "Invalid image format");
}

#[tokio::test]
async fn test_invalid_request_response_is_400() {
    let response =
        AppError::InvalidRequest("Missing file field 'image'".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["error"], "Missing file field 'image'");
}
