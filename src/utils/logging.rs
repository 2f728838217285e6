//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to prevent
//! sensitive data (like API keys) from leaking into logs.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line output for terse terminals.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes sensitive information from log messages.
///
/// Upstream error bodies occasionally echo request headers back at the
/// caller, so anything we log from the upstream goes through here first.
/// OpenAI secret keys start with `sk-`; every occurrence is replaced with
/// a placeholder before the string reaches a log sink.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    while let Some(pos) = result.find("sk-") {
        let start = pos;
        // Search for the end of the key (delimiter or end of string)
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == ',' || c == '}')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "Authorization: Bearer sk-proj-abc123XYZ";
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-proj-abc123XYZ"));
    }

    #[test]
    fn test_sanitize_quoted_key() {
        let input = r#"{"message": "Incorrect API key provided: sk-live9x8", "type": "invalid_request_error"}"#;
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-live9x8"));
        // The rest of the payload survives intact
        assert!(output.contains("invalid_request_error"));
    }

    #[test]
    fn test_sanitize_multiple_keys() {
        let input = "first sk-aaa then sk-bbb";
        let output = sanitize(input);
        assert!(!output.contains("sk-aaa"));
        assert!(!output.contains("sk-bbb"));
        assert_eq!(output.matches("[REDACTED_API_KEY]").count(), 2);
    }

    #[test]
    fn test_sanitize_passthrough() {
        let input = "nothing secret here";
        assert_eq!(sanitize(input), input);
    }
}
