//! Host Signal Source
//!
//! Reads advanced signals from the machine the CLI runs on.
//! Mirrors what a browser exposes to a page, using native equivalents:
//! - CPU count, memory (sysinfo), timezone, language
//! - Screen mode and GPU vendor from Linux DRM sysfs
//! - Render hash over stable host traits (like the HWID)
//! - Ad-block status from a DNS sinkhole probe
//!
//! Any read that fails leaves its signal unknown.

use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::source::SignalSource;
use super::types::{AdBlockStatus, AdvancedSignals};
use crate::logic::config::CoreConfig;

// ============================================================================
// CONSTANTS
// ============================================================================

const DRM_CLASS_DIR: &str = "/sys/class/drm";
const TIMEZONE_FILE: &str = "/etc/timezone";
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

static UA_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Edg|OPR|Opera|Firefox|Chrome|Version)/(\d+)").expect("valid regex")
});

// ============================================================================
// HOST SOURCE
// ============================================================================

/// Signal source backed by the local host
#[derive(Debug, Clone)]
pub struct HostSignalSource {
    probe_domain: String,
    settle: Duration,
    user_agent: Option<String>,
}

impl HostSignalSource {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            probe_domain: config.adblock_probe_domain.clone(),
            settle: Duration::from_millis(config.adblock_settle_ms),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Resolve the probe domain within the settle window
    async fn probe_ad_block(&self) -> AdBlockStatus {
        let lookup = tokio::net::lookup_host((self.probe_domain.as_str(), 80));

        match tokio::time::timeout(self.settle, lookup).await {
            Ok(Ok(addrs)) => {
                let ips: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();
                classify_probe(&ips)
            }
            Ok(Err(e)) => {
                log::debug!("Ad-block probe lookup failed: {}", e);
                AdBlockStatus::Unknown
            }
            Err(_) => {
                log::debug!("Ad-block probe did not settle within {:?}", self.settle);
                AdBlockStatus::Unknown
            }
        }
    }
}

#[async_trait]
impl SignalSource for HostSignalSource {
    fn name(&self) -> &str {
        "host"
    }

    async fn collect_advanced(&self) -> AdvancedSignals {
        // sysfs, sysinfo and hostname reads block; run them beside the probe
        let host = tokio::task::spawn_blocking(|| read_host_signals(Path::new(DRM_CLASS_DIR)));
        let ad_block_status = self.probe_ad_block().await;

        let mut signals = match host.await {
            Ok(signals) => signals,
            Err(e) => {
                log::warn!("Host signal reader did not complete: {}", e);
                AdvancedSignals::default()
            }
        };
        signals.ad_block_status = ad_block_status;
        signals.browser_version_number = self.user_agent.as_deref().and_then(parse_browser_version);

        log::debug!(
            "Host signals collected: {}/12 observed",
            signals.observed_count()
        );
        signals
    }
}

/// Every host signal except the ad-block probe and the UA version.
/// Synchronous; call off the async runtime.
fn read_host_signals(drm_dir: &Path) -> AdvancedSignals {
    let timezone = read_timezone();
    let language = read_language();

    AdvancedSignals {
        screen_resolution: read_screen_resolution(drm_dir),
        color_depth_bits: None,
        hardware_concurrency: std::thread::available_parallelism()
            .ok()
            .map(|n| n.get() as u32),
        device_memory_gb: read_memory_gb(),
        canvas_hash: Some(render_hash(timezone.as_deref(), language.as_deref())),
        gpu_model: read_gpu_vendor(drm_dir),
        ad_block_status: AdBlockStatus::Unknown,
        dark_mode: dark_mode_from_theme(std::env::var("GTK_THEME").ok().as_deref()),
        many_plugins: None,
        browser_version_number: None,
        timezone,
        language,
    }
}

// ============================================================================
// READERS
// ============================================================================

/// Major browser version from a User-Agent string
pub fn parse_browser_version(user_agent: &str) -> Option<u32> {
    let mut chrome = None;
    let mut safari = None;

    for caps in UA_VERSION.captures_iter(user_agent) {
        let version = caps[2].parse::<u32>().ok();
        match &caps[1] {
            // Edge, Opera and Firefox identify themselves explicitly
            "Edg" | "OPR" | "Opera" | "Firefox" => return version,
            "Chrome" => chrome = chrome.or(version),
            "Version" => safari = safari.or(version),
            _ => {}
        }
    }

    chrome.or(safari)
}

/// Resolution of the first connected DRM connector
fn read_screen_resolution(drm_dir: &Path) -> Option<String> {
    let entries = std::fs::read_dir(drm_dir).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        let connected = std::fs::read_to_string(path.join("status"))
            .map(|s| s.trim() == "connected")
            .unwrap_or(false);
        if !connected {
            continue;
        }
        if let Ok(modes) = std::fs::read_to_string(path.join("modes")) {
            if let Some(mode) = modes.lines().next().filter(|m| !m.is_empty()) {
                return Some(mode.trim().to_string());
            }
        }
    }

    log::debug!("Screen resolution unavailable");
    None
}

/// GPU vendor from the first DRM card's PCI vendor id
fn read_gpu_vendor(drm_dir: &Path) -> Option<String> {
    let entries = std::fs::read_dir(drm_dir).ok()?;

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with("card") || name.contains('-') {
            continue;
        }
        if let Ok(vendor) = std::fs::read_to_string(entry.path().join("device/vendor")) {
            if let Some(model) = gpu_vendor_name(vendor.trim()) {
                return Some(model);
            }
        }
    }

    log::debug!("GPU model unavailable");
    None
}

/// Map a PCI vendor id to a renderer-like name
pub fn gpu_vendor_name(vendor_id: &str) -> Option<String> {
    let name = match vendor_id.to_lowercase().as_str() {
        "0x10de" => "NVIDIA",
        "0x1002" => "AMD",
        "0x8086" => "Intel",
        "0x1af4" => "virtio",
        "0x15ad" => "VMware SVGA",
        _ => return None,
    };
    Some(format!("{} ({})", name, vendor_id))
}

fn read_memory_gb() -> Option<f32> {
    let mut sys = sysinfo::System::new();
    sys.refresh_memory();
    let total = sys.total_memory();
    if total == 0 {
        return None;
    }
    Some(((total as f64 / GIB) * 10.0).round() as f32 / 10.0)
}

fn read_timezone() -> Option<String> {
    std::env::var("TZ")
        .ok()
        .map(|tz| tz.trim_start_matches(':').to_string())
        .filter(|tz| !tz.is_empty())
        .or_else(|| read_timezone_file(Path::new(TIMEZONE_FILE)))
        .or_else(|| {
            let offset = chrono::Local::now().offset().to_string();
            Some(format!("UTC{}", offset))
        })
}

fn read_timezone_file(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn read_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find_map(|value| normalize_locale(&value))
}

/// "en_US.UTF-8" -> "en-US"; "C"/"POSIX" carry no language
pub fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw.split(|c: char| c == '.' || c == '@').next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

pub fn dark_mode_from_theme(theme: Option<&str>) -> Option<bool> {
    let theme = theme?.trim();
    if theme.is_empty() {
        return None;
    }
    Some(theme.to_lowercase().contains("dark"))
}

/// Ad-block verdict from the probe's resolved addresses.
/// Sinkholed (0.0.0.0 / loopback) means a DNS-level blocker is active.
pub fn classify_probe(addrs: &[IpAddr]) -> AdBlockStatus {
    if addrs.is_empty() {
        return AdBlockStatus::Unknown;
    }
    if addrs.iter().any(|ip| ip.is_unspecified() || ip.is_loopback()) {
        AdBlockStatus::Enabled
    } else {
        AdBlockStatus::Disabled
    }
}

/// Stable hash over host traits, playing the role of the canvas hash
fn render_hash(timezone: Option<&str>, language: Option<&str>) -> String {
    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    let combined = format!(
        "{}|{}|{}|{}|{}",
        host,
        std::env::consts::OS,
        std::env::consts::ARCH,
        timezone.unwrap_or(""),
        language.unwrap_or("")
    );

    let mut hasher = Sha256::new();
    hasher.update(combined.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// TESTS
// ============================================================================
