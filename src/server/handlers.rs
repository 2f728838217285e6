// HTTP request handlers

use super::page::INDEX_HTML;
use super::routes::AppState;
use crate::error::AppError;
use crate::manifest::Manifest;
use crate::upload;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

/// Handler for the browser upload page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for `/api/edit`, the proxy route between the browser form and
/// the upstream image-edit API.
///
/// The pipeline is linear: credential precondition, multipart validation,
/// one awaited upstream call, binary relay. Every failure maps to a JSON
/// `{ "error": ... }` body through `AppError`.
pub async fn edit_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    // Credential check comes first, before the body is touched, so a
    // misconfigured server answers 500 regardless of what was uploaded.
    if !state.openai_client.has_api_key() {
        return Err(AppError::Config(
            "OPENAI_API_KEY is not set in the server environment".to_string(),
        ));
    }

    let multipart = multipart
        .map_err(|e| AppError::InvalidRequest(format!("Expected multipart/form-data: {}", e)))?;
    let image = upload::image_from_multipart(multipart).await?;

    info!(
        filename = %image.filename,
        content_type = %image.content_type,
        size = image.bytes.len(),
        "forwarding edit request"
    );

    let png = state.openai_client.edit_image(&image).await?;

    // Every request triggers a fresh edit; stale bytes must never be served.
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png,
    )
        .into_response())
}

/// Handler for the miniapp manifest. The document is assembled once at
/// startup and served unchanged for the life of the process.
pub async fn manifest_handler(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}

/// Handler for `/health`. Local inspection only: no upstream call is made,
/// so probing health never spends image quota.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check the upstream credential
    let credential_check = if state.openai_client.has_api_key() {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "OPENAI_API_KEY is not set; edit requests will fail".to_string(),
        }
    };
    checks.insert("openai_credentials".to_string(), credential_check);

    // Check upstream configuration
    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "model {} via {}",
            state.config.openai.model, state.config.openai.api_base_url
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    // Check the manifest base URL
    let manifest_check = if state.config.manifest.public_url.is_some() {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("home URL: {}", state.manifest.miniapp.home_url),
        }
    } else {
        if matches!(overall_status, HealthStatus::Healthy) {
            overall_status = HealthStatus::Degraded;
        }
        HealthCheck {
            status: "warning".to_string(),
            message: format!(
                "manifest.public_url unset; manifest advertises {}",
                state.manifest.miniapp.home_url
            ),
        }
    };
    checks.insert("manifest".to_string(), manifest_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
