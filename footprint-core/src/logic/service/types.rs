//! Scan Service Wire Types
//!
//! Request/response shapes of the device-scan and breach-check endpoints.
//! Shared with the server so both sides agree on field names.

use serde::{Deserialize, Serialize};

// ============================================================================
// DEVICE SCAN
// ============================================================================

/// Basic identity fields the server can observe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default, alias = "browser")]
    pub browser_name: Option<String>,
    #[serde(default, alias = "os")]
    pub os_name: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub scan_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceScanResponse {
    #[serde(default)]
    pub scan_id: Option<String>,
    pub device_info: DeviceInfo,
}

// ============================================================================
// BREACH CHECK
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachCheckRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breach {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub leaked_data: Vec<String>,
}

/// Breach-check result, passed through exactly as the service returned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachResult {
    pub email: String,
    #[serde(default)]
    pub breaches: Vec<Breach>,
}

impl BreachResult {
    /// Empty breach list is a valid "clean" result, not an error
    pub fn is_clean(&self) -> bool {
        self.breaches.is_empty()
    }

    pub fn headline(&self) -> String {
        match self.breaches.len() {
            0 => "No Breaches Found!".to_string(),
            1 => "Found 1 Breach".to_string(),
            n => format!("Found {} Breaches", n),
        }
    }
}

// ============================================================================
// MISC
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_accepts_short_field_names() {
        let info: DeviceInfo = serde_json::from_str(
            r#"{"ip_address":"10.0.0.2","browser":"Safari","os":"macOS","device_type":"Desktop"}"#,
        )
        .unwrap();
        assert_eq!(info.browser_name.as_deref(), Some("Safari"));
        assert_eq!(info.os_name.as_deref(), Some("macOS"));
        assert!(info.scan_time.is_none());
    }

    #[test]
    fn test_device_scan_response_ignores_merged_extras() {
        let response: DeviceScanResponse = serde_json::from_str(
            r#"{"scan_id":"abc","device_info":{"browser_name":"Opera","timezone":"UTC","ad_block_status":"enabled"}}"#,
        )
        .unwrap();
        assert_eq!(response.scan_id.as_deref(), Some("abc"));
        assert_eq!(response.device_info.browser_name.as_deref(), Some("Opera"));
    }

    #[test]
    fn test_breach_headline() {
        let mut result = BreachResult {
            email: "a@b.c".to_string(),
            breaches: vec![],
        };
        assert!(result.is_clean());
        assert_eq!(result.headline(), "No Breaches Found!");

        result.breaches.push(Breach {
            name: "Adobe".to_string(),
            date: "2013-10-04".to_string(),
            leaked_data: vec!["Email addresses".to_string(), "Passwords".to_string()],
        });
        assert_eq!(result.headline(), "Found 1 Breach");

        result.breaches.push(result.breaches[0].clone());
        assert_eq!(result.headline(), "Found 2 Breaches");
    }
}
