// HTTP routes configuration

use super::handlers::{edit_handler, health_handler, index_handler, manifest_handler};
use crate::config::AppConfig;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::openai::OpenAiClient;
use crate::upload::models::MAX_IMAGE_SIZE_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

// Headroom above the image cap for multipart boundaries and part headers.
const BODY_LIMIT_BYTES: usize = MAX_IMAGE_SIZE_BYTES + 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub openai_client: Arc<OpenAiClient>,
    pub manifest: Arc<Manifest>,
}

pub fn create_router(
    config: AppConfig,
    openai_client: OpenAiClient,
    manifest: Manifest,
) -> Result<Router> {
    let state = AppState {
        config,
        openai_client: Arc::new(openai_client),
        manifest: Arc::new(manifest),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/edit", post(edit_handler))
        .route("/health", get(health_handler))
        .route("/.well-known/farcaster.json", get(manifest_handler))
        // Image uploads exceed axum's built-in 2MB body cap; the effective
        // limit is the layer below.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    Ok(app)
}
