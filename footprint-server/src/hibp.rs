//! Have I Been Pwned client
//!
//! Breach lookups never fail the request: any upstream problem is logged
//! and reported as a clean result.

use std::time::Duration;

use footprint_core::logic::scan::mask_email;
use footprint_core::logic::service::Breach;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// HIBP rejects requests without a User-Agent
pub const HIBP_USER_AGENT: &str = "whoMi-Digital-Footprint-Scanner";

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HibpBreach {
    name: Option<String>,
    breach_date: Option<String>,
    #[serde(default)]
    data_classes: Vec<String>,
}

impl From<HibpBreach> for Breach {
    fn from(b: HibpBreach) -> Self {
        Breach {
            name: b.name.unwrap_or_else(|| UNKNOWN.to_string()),
            date: b.breach_date.unwrap_or_else(|| UNKNOWN.to_string()),
            leaked_data: b.data_classes,
        }
    }
}

#[derive(Clone)]
pub struct HibpClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HibpClient {
    /// `None` when no API key is configured
    pub fn from_config(config: &Config) -> AppResult<Option<Self>> {
        let Some(api_key) = config.hibp_api_key.clone() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.hibp_timeout_secs))
            .user_agent(HIBP_USER_AGENT)
            .build()?;

        let base_url = Url::parse(&config.hibp_api_url)
            .map_err(|e| AppError::InternalError(format!("invalid HIBP_API_URL: {}", e)))?;

        Ok(Some(Self { http, base_url, api_key }))
    }

    /// Breaches for an account; upstream failures degrade to an empty list
    pub async fn breaches_for(&self, email: &str) -> Vec<Breach> {
        match self.fetch(email).await {
            Ok(breaches) => breaches,
            Err(e) => {
                tracing::warn!("HIBP lookup for {} failed: {}", mask_email(email), e);
                Vec::new()
            }
        }
    }

    async fn fetch(&self, email: &str) -> AppResult<Vec<Breach>> {
        let url = self.account_url(email)?;

        let response = self.http
            .get(url)
            .header("hibp-api-key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let breaches: Vec<HibpBreach> = response.json().await?;
                Ok(breaches.into_iter().map(Breach::from).collect())
            }
            // Account not in any breach
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status => Err(AppError::ExternalServiceError(format!("HIBP returned {}", status))),
        }
    }

    fn account_url(&self, email: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InternalError("HIBP_API_URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("breachedaccount")
            .push(email);
        url.query_pairs_mut().append_pair("truncateResponse", "false");
        Ok(url)
    }
}
