//! Configuration module

use std::env;

/// Default Have I Been Pwned v3 base URL
pub const DEFAULT_HIBP_API_URL: &str = "https://haveibeenpwned.com/api/v3";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Have I Been Pwned API key; breach checks report clean without one
    pub hibp_api_key: Option<String>,

    /// Have I Been Pwned base URL
    pub hibp_api_url: String,

    /// Have I Been Pwned request timeout in seconds
    pub hibp_timeout_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            hibp_api_key: None,
            hibp_api_url: DEFAULT_HIBP_API_URL.to_string(),
            hibp_timeout_secs: 10,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            hibp_api_key: env::var("HIBP_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),

            hibp_api_url: env::var("HIBP_API_URL")
                .unwrap_or(defaults.hibp_api_url),

            hibp_timeout_secs: env::var("HIBP_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.hibp_timeout_secs),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
