// blazerize - web proxy that dresses uploaded photos in an orange blazer

use anyhow::Result;
use blazerize::cli::Args;
use blazerize::config::AppConfig;
use blazerize::manifest::Manifest;
use blazerize::openai::OpenAiClient;
use blazerize::server::create_router;
use blazerize::utils::logging;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration and apply CLI overrides
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(public_url) = args.public_url {
        config.manifest.public_url = Some(public_url);
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting blazerize v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the upstream client
    let openai_client = OpenAiClient::new(&config.openai)?;
    if !openai_client.has_api_key() {
        warn!("OPENAI_API_KEY is not set; /api/edit will fail until it is configured");
    }

    // Phase 4: Assemble the miniapp manifest
    let manifest = Manifest::build(&config);
    info!("Manifest home URL: {}", manifest.miniapp.home_url);

    // Phase 5: Build and start HTTP server
    let app = create_router(config.clone(), openai_client, manifest)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
