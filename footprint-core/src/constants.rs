//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default API server, only edit this file.

/// Default scan service URL (local footprint-server)
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default HTTP timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Domain resolved to detect DNS-level ad blocking
pub const DEFAULT_ADBLOCK_PROBE_DOMAIN: &str = "doubleclick.net";

/// How long the ad-block probe may take to settle (milliseconds)
pub const DEFAULT_ADBLOCK_SETTLE_MS: u64 = 100;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "whoMi Footprint";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scan service URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("FOOTPRINT_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get HTTP timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("FOOTPRINT_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Origin the user is browsing from; its scheme decides the transport check.
/// Falls back to the API URL.
pub fn get_page_origin() -> Option<String> {
    std::env::var("FOOTPRINT_PAGE_ORIGIN")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Get ad-block probe domain from environment or use default
pub fn get_adblock_probe_domain() -> String {
    std::env::var("FOOTPRINT_ADBLOCK_PROBE_DOMAIN")
        .unwrap_or_else(|_| DEFAULT_ADBLOCK_PROBE_DOMAIN.to_string())
}

/// Get ad-block settle window from environment or use default
pub fn get_adblock_settle_ms() -> u64 {
    std::env::var("FOOTPRINT_ADBLOCK_SETTLE_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ADBLOCK_SETTLE_MS)
}

/// User-Agent presented to the scan service (optional)
pub fn get_user_agent() -> Option<String> {
    std::env::var("FOOTPRINT_USER_AGENT")
        .ok()
        .filter(|s| !s.trim().is_empty())
}
