//! Signal Types
//!
//! Core types for the fingerprint signal vocabulary.
//! No collection logic here - only data structures and field accessors.

use serde::{Deserialize, Serialize};

use crate::logic::service::DeviceInfo;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Renderer strings reported by software rasterizers.
/// A GPU model matching one of these says nothing about the hardware.
pub const SOFTWARE_RENDERER_SIGNATURES: &[&str] = &[
    "swiftshader",
    "llvmpipe",
    "softpipe",
    "microsoft basic render",
];

/// Placeholder reported when the renderer could not be read
pub const UNKNOWN_GPU: &str = "Unknown GPU";

// ============================================================================
// SCAN MODE
// ============================================================================

/// Which set of signals a scan collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Identity signals the server can see (IP, browser, OS)
    #[default]
    Basic,
    /// Basic + client-side fingerprint signals
    Advanced,
}

impl ScanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Basic => "basic",
            ScanMode::Advanced => "advanced",
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, ScanMode::Advanced)
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// AD-BLOCK STATUS
// ============================================================================

/// Result of the ad-block heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdBlockStatus {
    Enabled,
    Disabled,
    /// Detection did not settle or could not run
    #[default]
    Unknown,
}

impl AdBlockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdBlockStatus::Enabled => "enabled",
            AdBlockStatus::Disabled => "disabled",
            AdBlockStatus::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AdBlockStatus::Unknown)
    }
}

// ============================================================================
// ADVANCED SIGNALS
// ============================================================================

/// Client-side signals collected in advanced mode.
///
/// Every field is best-effort: a signal that could not be read stays `None`
/// (or `Unknown` for ad-block) instead of failing the whole collection.
/// This is also the payload sent to the device-scan service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_depth_bits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_memory_gb: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_model: Option<String>,
    #[serde(default)]
    pub ad_block_status: AdBlockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many_plugins: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_version_number: Option<u32>,
}

impl AdvancedSignals {
    /// Number of signals that were actually observed
    pub fn observed_count(&self) -> usize {
        [
            self.screen_resolution.is_some(),
            self.color_depth_bits.is_some(),
            self.timezone.is_some(),
            self.language.is_some(),
            self.hardware_concurrency.is_some(),
            self.device_memory_gb.is_some(),
            self.canvas_hash.is_some(),
            self.gpu_model.is_some(),
            !self.ad_block_status.is_unknown(),
            self.dark_mode.is_some(),
            self.many_plugins.is_some(),
            self.browser_version_number.is_some(),
        ]
        .iter()
        .filter(|observed| **observed)
        .count()
    }
}

// ============================================================================
// SIGNAL VECTOR
// ============================================================================

/// Immutable record of everything observed about one client.
///
/// `is_advanced` has three meanings:
/// - `None`        no scan has been performed (the "no scan" sentinel)
/// - `Some(false)` basic vector, advanced fields are absent
/// - `Some(true)`  advanced vector, advanced fields populated best-effort
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalVector {
    // Basic identity
    pub ip_address: Option<String>,
    pub device_name: Option<String>,
    pub device_type: Option<String>,
    pub browser_name: Option<String>,
    pub browser_version_number: Option<u32>,
    pub os_name: Option<String>,

    // Advanced
    pub screen_resolution: Option<String>,
    pub color_depth_bits: Option<u32>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub hardware_concurrency: Option<u32>,
    pub device_memory_gb: Option<f32>,
    pub canvas_hash: Option<String>,
    pub gpu_model: Option<String>,
    pub ad_block_status: AdBlockStatus,
    pub dark_mode: Option<bool>,
    pub many_plugins: Option<bool>,

    // Session context
    /// Whether the page/API connection was observed to be encrypted
    pub connection_secure: Option<bool>,
    /// Server timestamp of the scan (display only)
    pub scan_time: Option<String>,

    pub is_advanced: Option<bool>,
}

impl SignalVector {
    /// The explicit "nothing scanned yet" sentinel
    pub fn no_scan() -> Self {
        Self::default()
    }

    /// Basic vector from the device-scan service response
    pub fn from_device(info: &DeviceInfo) -> Self {
        Self {
            ip_address: info.ip_address.clone(),
            device_name: info.device_name.clone(),
            device_type: info.device_type.clone(),
            browser_name: info.browser_name.clone(),
            os_name: info.os_name.clone(),
            scan_time: info.scan_time.clone(),
            is_advanced: Some(false),
            ..Default::default()
        }
    }

    /// Merge advanced signals, turning this into an advanced vector.
    /// A browser version already known from the service is kept when the
    /// collector could not read one.
    pub fn with_advanced(mut self, advanced: AdvancedSignals) -> Self {
        self.screen_resolution = advanced.screen_resolution;
        self.color_depth_bits = advanced.color_depth_bits;
        self.timezone = advanced.timezone;
        self.language = advanced.language;
        self.hardware_concurrency = advanced.hardware_concurrency;
        self.device_memory_gb = advanced.device_memory_gb;
        self.canvas_hash = advanced.canvas_hash;
        self.gpu_model = advanced.gpu_model;
        self.ad_block_status = advanced.ad_block_status;
        self.dark_mode = advanced.dark_mode;
        self.many_plugins = advanced.many_plugins;
        if advanced.browser_version_number.is_some() {
            self.browser_version_number = advanced.browser_version_number;
        }
        self.is_advanced = Some(true);
        self
    }

    /// Record the transport observation
    pub fn with_connection_secure(mut self, secure: Option<bool>) -> Self {
        self.connection_secure = secure;
        self
    }

    pub fn is_no_scan(&self) -> bool {
        self.is_advanced.is_none()
    }

    pub fn is_advanced(&self) -> bool {
        self.is_advanced == Some(true)
    }

    pub fn is_basic(&self) -> bool {
        self.is_advanced == Some(false)
    }

    /// Mode this vector was produced in (None for the sentinel)
    pub fn mode(&self) -> Option<ScanMode> {
        self.is_advanced.map(|advanced| {
            if advanced {
                ScanMode::Advanced
            } else {
                ScanMode::Basic
            }
        })
    }

    /// Screen resolution as (width, height)
    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.screen_resolution.as_deref().and_then(parse_resolution)
    }

    /// GPU model when it identifies real hardware
    pub fn hardware_gpu(&self) -> Option<&str> {
        self.gpu_model
            .as_deref()
            .filter(|model| is_hardware_gpu(model))
    }

    /// Non-empty canvas hash
    pub fn canvas_hash(&self) -> Option<&str> {
        self.canvas_hash
            .as_deref()
            .filter(|hash| !hash.trim().is_empty())
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Parse "2560x1440" (also "2560 x 1440", "2560×1440")
pub fn parse_resolution(raw: &str) -> Option<(u32, u32)> {
    let normalized = raw.to_lowercase().replace('×', "x");
    let (w, h) = normalized.split_once('x')?;
    let width = w.trim().parse().ok()?;
    let height = h.trim().parse().ok()?;
    Some((width, height))
}

/// True when the renderer string names real GPU hardware
pub fn is_hardware_gpu(model: &str) -> bool {
    let trimmed = model.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_GPU) {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !SOFTWARE_RENDERER_SIGNATURES
        .iter()
        .any(|signature| lower.contains(signature))
}

// ============================================================================
// TESTS
// ============================================================================
