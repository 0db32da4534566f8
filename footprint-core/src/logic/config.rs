//! Core Configuration
//!
//! Runtime settings for the scan client and host signal source.
//! Loaded from the environment (see `constants.rs` for variables and defaults).

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Scan service base URL, e.g. `http://localhost:5000/api`
    pub api_url: String,
    /// HTTP transport timeout (seconds)
    pub timeout_secs: u64,
    /// Origin whose scheme decides whether the connection is secure
    pub page_origin: Option<String>,
    pub adblock_probe_domain: String,
    pub adblock_settle_ms: u64,
    pub user_agent: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            page_origin: None,
            adblock_probe_domain: constants::DEFAULT_ADBLOCK_PROBE_DOMAIN.to_string(),
            adblock_settle_ms: constants::DEFAULT_ADBLOCK_SETTLE_MS,
            user_agent: None,
        }
    }
}

impl CoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: constants::get_api_url(),
            timeout_secs: constants::get_timeout_secs(),
            page_origin: constants::get_page_origin(),
            adblock_probe_domain: constants::get_adblock_probe_domain(),
            adblock_settle_ms: constants::get_adblock_settle_ms(),
            user_agent: constants::get_user_agent(),
        }
    }

    /// Transport observation from the page origin (or the API URL).
    /// None when the scheme is neither http nor https.
    pub fn connection_secure(&self) -> Option<bool> {
        let origin = self.page_origin.as_deref().unwrap_or(&self.api_url);
        let scheme = origin.split("://").next()?.to_lowercase();
        match scheme.as_str() {
            "https" => Some(true),
            "http" => Some(false),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.adblock_settle_ms, 100);
    }

    #[test]
    fn test_connection_secure_from_api_url() {
        let config = CoreConfig {
            api_url: "https://footprint.example/api".to_string(),
            ..Default::default()
        };
        assert_eq!(config.connection_secure(), Some(true));
        assert_eq!(CoreConfig::default().connection_secure(), Some(false));
    }

    #[test]
    fn test_page_origin_overrides_api_url() {
        let config = CoreConfig {
            api_url: "http://localhost:5000/api".to_string(),
            page_origin: Some("HTTPS://whomi.example".to_string()),
            ..Default::default()
        };
        assert_eq!(config.connection_secure(), Some(true));
    }

    #[test]
    fn test_unknown_scheme_is_unobserved() {
        let config = CoreConfig {
            page_origin: Some("file:///tmp/index.html".to_string()),
            ..Default::default()
        };
        assert_eq!(config.connection_secure(), None);

        let bare = CoreConfig {
            page_origin: Some("localhost:5173".to_string()),
            ..Default::default()
        };
        assert_eq!(bare.connection_secure(), None);
    }
}
