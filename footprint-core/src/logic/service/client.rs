//! Scan Service Client
//!
//! HTTP client for the device-scan and breach-check service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::error::ServiceError;
use super::types::{
    BreachCheckRequest, BreachResult, DeviceScanResponse, ErrorResponse, HealthResponse,
};
use crate::logic::config::CoreConfig;
use crate::logic::signals::AdvancedSignals;

// ============================================================================
// SCAN SERVICE TRAIT
// ============================================================================

/// The remote capabilities the orchestrator depends on
#[async_trait]
pub trait ScanService: Send + Sync {
    /// Basic device identity; `advanced` is forwarded as the request payload
    async fn device_scan(
        &self,
        advanced: Option<&AdvancedSignals>,
    ) -> Result<DeviceScanResponse, ServiceError>;

    async fn breach_check(&self, email: &str) -> Result<BreachResult, ServiceError>;
}

// ============================================================================
// HTTP IMPLEMENTATION
// ============================================================================

pub struct HttpScanService {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpScanService {
    pub fn new(config: &CoreConfig) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check server health
    pub async fn health_check(&self) -> Result<HealthResponse, ServiceError> {
        let url = format!("{}/health", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        read_json(response, "Health check failed").await
    }
}

#[async_trait]
impl ScanService for HttpScanService {
    async fn device_scan(
        &self,
        advanced: Option<&AdvancedSignals>,
    ) -> Result<DeviceScanResponse, ServiceError> {
        let url = format!("{}/device-scan", self.base_url);

        let payload = match advanced {
            Some(signals) => serde_json::to_value(signals)
                .map_err(|e| ServiceError::Parse(e.to_string()))?,
            None => serde_json::json!({}),
        };

        log::debug!("POST {} (advanced payload: {})", url, advanced.is_some());

        let response = self.http_client
            .post(&url)
            .json(&payload)
            .send()
            .await?;

        read_json(response, "Device scan failed").await
    }

    async fn breach_check(&self, email: &str) -> Result<BreachResult, ServiceError> {
        let url = format!("{}/breach-check", self.base_url);

        let request = BreachCheckRequest {
            email: email.to_string(),
        };

        let response = self.http_client
            .post(&url)
            .json(&request)
            .send()
            .await?;

        read_json(response, "Breach check failed").await
    }
}

// ============================================================================
// RESPONSE HANDLING
// ============================================================================

/// Decode a success body, or turn an error body into `ServiceError::Status`
/// carrying the server's own message.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback_message: &str,
) -> Result<T, ServiceError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| ServiceError::Parse(e.to_string()));
    }

    let message = error_message(&body).unwrap_or_else(|| fallback_message.to_string());
    log::warn!("Scan service returned {}: {}", status.as_u16(), message);

    Err(ServiceError::Status {
        status: status.as_u16(),
        message,
    })
}

fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return Some(parsed.error).filter(|m| !m.is_empty());
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response, returning the base URL and
    /// a handle yielding the raw request that was received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];

            // Read headers, then exactly Content-Length body bytes
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (format!("http://{}/api", addr), handle)
    }

    fn service(url: &str) -> HttpScanService {
        let config = CoreConfig {
            api_url: url.to_string(),
            ..CoreConfig::default()
        };
        HttpScanService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_device_scan_success() {
        let (url, server) = serve_once(
            "HTTP/1.1 201 Created",
            r#"{"scan_id":"s-1","device_info":{"ip_address":"203.0.113.5","browser_name":"Google Chrome","os_name":"Windows 10/11","device_type":"Desktop","device_name":"Google Chrome on Windows 10/11","scan_time":"2026-10-15T08:00:00"}}"#,
        )
        .await;

        let response = service(&url).device_scan(None).await.unwrap();
        assert_eq!(response.scan_id.as_deref(), Some("s-1"));
        assert_eq!(response.device_info.ip_address.as_deref(), Some("203.0.113.5"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/device-scan"));
        assert!(request.ends_with("{}"));
    }

    #[tokio::test]
    async fn test_device_scan_sends_advanced_payload() {
        let (url, server) = serve_once(
            "HTTP/1.1 201 Created",
            r#"{"device_info":{}}"#,
        )
        .await;

        let signals = AdvancedSignals {
            timezone: Some("Asia/Tokyo".to_string()),
            ..Default::default()
        };
        service(&url).device_scan(Some(&signals)).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains(r#""timezone":"Asia/Tokyo""#));
    }

    #[tokio::test]
    async fn test_error_payload_is_surfaced_verbatim() {
        let (url, _server) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"error":"Device scan failed: database locked"}"#,
        )
        .await;

        let err = service(&url).device_scan(None).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Device scan failed: database locked");
    }

    #[tokio::test]
    async fn test_unparsable_success_body_is_parse_error() {
        let (url, _server) = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;

        let err = service(&url).breach_check("a@b.c").await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_breach_check_clean_result() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"email":"me@example.com","breaches":[]}"#,
        )
        .await;

        let result = service(&url).breach_check("me@example.com").await.unwrap();
        assert!(result.is_clean());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/breach-check"));
        assert!(request.contains(r#""email":"me@example.com""#));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = service(&format!("http://{}/api", addr))
            .breach_check("a@b.c")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Network(_)));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error":"email required"}"#).as_deref(), Some("email required"));
        assert_eq!(error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_message("   "), None);
        assert_eq!(error_message(r#"{"error":""}"#), None);
    }
}
