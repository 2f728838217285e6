//! Miniapp manifest served under `/.well-known/farcaster.json`.
//!
//! The manifest is assembled once at startup: the base URL is resolved
//! through a fallback chain (configured public URL, then the local bind
//! address) and every asset URL is joined onto it. Miniapp hosts fetch this
//! document to verify domain ownership and render directory listings.

use crate::config::AppConfig;
use serde::Serialize;

/// Manifest version understood by miniapp hosts.
const MANIFEST_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub account_association: AccountAssociation,
    pub base_builder: BaseBuilder,
    pub miniapp: Miniapp,
}

/// Signed attestation binding the serving domain to a hosting account.
/// Opaque to this application; values come straight from configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseBuilder {
    pub owner_address: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Miniapp {
    pub version: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub screenshot_urls: Vec<String>,
    pub icon_url: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
    pub home_url: String,
    pub webhook_url: String,
    pub primary_category: String,
    pub tags: Vec<String>,
    pub hero_image_url: String,
    pub tagline: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image_url: String,
}

impl Manifest {
    /// Assemble the manifest from configuration. Called once at startup;
    /// the result is shared immutably for the life of the process.
    pub fn build(config: &AppConfig) -> Self {
        let base = resolve_base_url(config);
        let m = &config.manifest;

        Self {
            account_association: AccountAssociation {
                header: m.account_association.header.clone(),
                payload: m.account_association.payload.clone(),
                signature: m.account_association.signature.clone(),
            },
            base_builder: BaseBuilder {
                owner_address: m.owner_address.clone(),
            },
            miniapp: Miniapp {
                version: MANIFEST_VERSION.to_string(),
                name: m.name.clone(),
                subtitle: String::new(),
                description: m.description.clone(),
                screenshot_urls: Vec::new(),
                icon_url: format!("{base}/icon.png"),
                splash_image_url: format!("{base}/splash.png"),
                splash_background_color: m.splash_background_color.clone(),
                home_url: base.clone(),
                webhook_url: format!("{base}/api/webhook"),
                primary_category: m.primary_category.clone(),
                tags: m.tags.clone(),
                hero_image_url: format!("{base}/hero.png"),
                tagline: String::new(),
                og_title: m.name.clone(),
                og_description: m.description.clone(),
                og_image_url: format!("{base}/hero.png"),
            },
        }
    }
}

/// Base URL fallback chain: the configured public URL wins; otherwise the
/// local bind address. A trailing slash is stripped so URL joins stay clean.
fn resolve_base_url(config: &AppConfig) -> String {
    match &config.manifest.public_url {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => format!("http://{}:{}", config.server.host, config.server.port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_base_url_falls_back_to_bind_address() {
        let config = AppConfig::default();
        assert_eq!(resolve_base_url(&config), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_base_url_prefers_public_url_and_trims_slash() {
        let mut config = AppConfig::default();
        config.manifest.public_url = Some("https://blazerize.example.com/".to_string());
        assert_eq!(resolve_base_url(&config), "https://blazerize.example.com");
    }

    #[test]
    fn test_blank_public_url_is_ignored() {
        let mut config = AppConfig::default();
        config.manifest.public_url = Some("   ".to_string());
        assert_eq!(resolve_base_url(&config), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_manifest_urls_and_shape() {
        let mut config = AppConfig::default();
        config.manifest.public_url = Some("https://app.example.com".to_string());
        let manifest = Manifest::build(&config);

        assert_eq!(manifest.miniapp.version, "1");
        assert_eq!(manifest.miniapp.home_url, "https://app.example.com");
        assert_eq!(manifest.miniapp.icon_url, "https://app.example.com/icon.png");
        assert_eq!(
            manifest.miniapp.webhook_url,
            "https://app.example.com/api/webhook"
        );

        // Hosts expect camelCase keys
        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json["accountAssociation"].is_object());
        assert!(json["baseBuilder"]["ownerAddress"].is_string());
        assert!(json["miniapp"]["splashImageUrl"].is_string());
        assert_eq!(json["miniapp"]["screenshotUrls"], serde_json::json!([]));
    }
}
