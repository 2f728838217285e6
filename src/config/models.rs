//! Configuration data structures for the blazerize edit proxy.
//!
//! This module defines the schema for the application settings, including
//! server parameters, upstream OpenAI API specifics, and the miniapp
//! manifest metadata.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream OpenAI image API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Miniapp manifest metadata served under `/.well-known`.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream OpenAI image-edit API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key for the upstream service. Read from the `OPENAI_API_KEY`
    /// environment variable at load time; never read from the config file.
    /// When absent the server still starts, but every edit request is
    /// rejected with a configuration error.
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Base URL for the OpenAI REST API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// The image model used for edits.
    /// Default: `gpt-image-1`
    #[serde(default = "default_model")]
    pub model: String,

    /// Connection and request timeout in seconds. Image edits routinely take
    /// tens of seconds, so this is generous by default.
    /// Default: `120`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Metadata for the miniapp manifest. URL fields are resolved against the
/// base URL fallback chain once at startup (see `manifest::Manifest`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Publicly reachable base URL of this deployment. When unset, the
    /// manifest falls back to `http://{server.host}:{server.port}`.
    #[serde(default)]
    pub public_url: Option<String>,

    /// Display name of the miniapp.
    /// Default: `blazerize`
    #[serde(default = "default_manifest_name")]
    pub name: String,

    /// One-line description shown in miniapp directories.
    #[serde(default = "default_manifest_description")]
    pub description: String,

    /// Directory category.
    /// Default: `utility`
    #[serde(default = "default_primary_category")]
    pub primary_category: String,

    /// Directory search tags.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Background color behind the splash image.
    /// Default: `#000000`
    #[serde(default = "default_splash_background_color")]
    pub splash_background_color: String,

    /// Signed domain-ownership attestation for the hosting account.
    #[serde(default)]
    pub account_association: AccountAssociationConfig,

    /// On-chain address of the app owner, if published.
    #[serde(default)]
    pub owner_address: String,
}

/// Domain-ownership attestation triple. All three values come from the
/// hosting platform and are opaque to this application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountAssociationConfig {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub signature: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `compact`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            public_url: None,
            name: default_manifest_name(),
            description: default_manifest_description(),
            primary_category: default_primary_category(),
            tags: default_tags(),
            splash_background_color: default_splash_background_color(),
            account_association: AccountAssociationConfig::default(),
            owner_address: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-image-1".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_manifest_name() -> String {
    "blazerize".to_string()
}

fn default_manifest_description() -> String {
    "Adds an orange blazer, white shirt, and black tie to your photos".to_string()
}

fn default_primary_category() -> String {
    "utility".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["photo".to_string(), "editor".to_string()]
}

fn default_splash_background_color() -> String {
    "#000000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
