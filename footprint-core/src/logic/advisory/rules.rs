//! Advisory Rules
//!
//! Independent condition -> advisory rules.
//! Each rule sees only the shared input (signals + estimate), never the
//! output of other rules. Ordering lives in `builtin_rules`.

use std::net::IpAddr;

use super::types::{AdvisoryKind, Tip};
use super::versions::{BrowserFamily, MaintainedVersions};
use crate::logic::entropy::{EntropyEstimate, UniquenessTier};
use crate::logic::signals::{AdBlockStatus, SignalVector};

// ============================================================================
// ADVISORY RULE TRAIT
// ============================================================================

pub trait AdvisoryRule: Send + Sync {
    fn name(&self) -> &str;

    /// Only evaluated for advanced vectors
    fn advanced_only(&self) -> bool {
        false
    }

    fn evaluate(&self, vector: &SignalVector, score: &EntropyEstimate) -> Option<Tip>;
}

// ============================================================================
// BUILT-IN RULES (evaluation order = rank order)
// ============================================================================

/// Connection observed without TLS
pub struct InsecureTransportRule;

impl AdvisoryRule for InsecureTransportRule {
    fn name(&self) -> &str {
        "InsecureTransportRule"
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        (vector.connection_secure == Some(false)).then(|| {
            Tip::new(
                AdvisoryKind::InsecureTransport,
                "Use HTTPS",
                "Your connection is not encrypted. Always use HTTPS websites.",
            )
        })
    }
}

pub struct ChromeBrowserRule;

impl AdvisoryRule for ChromeBrowserRule {
    fn name(&self) -> &str {
        "ChromeBrowserRule"
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        contains_ignore_case(vector.browser_name.as_deref(), "chrome").then(|| {
            Tip::new(
                AdvisoryKind::ChromeBrowser,
                "Consider Firefox",
                "Chrome tracks extensive telemetry. Firefox is more privacy-focused.",
            )
        })
    }
}

pub struct WindowsTelemetryRule;

impl AdvisoryRule for WindowsTelemetryRule {
    fn name(&self) -> &str {
        "WindowsTelemetryRule"
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        contains_ignore_case(vector.os_name.as_deref(), "windows").then(|| {
            Tip::new(
                AdvisoryKind::WindowsTelemetry,
                "Windows Privacy",
                "Review your Windows privacy settings to limit data collection.",
            )
        })
    }
}

/// Routable IP visible to every site
pub struct PublicIpRule;

impl AdvisoryRule for PublicIpRule {
    fn name(&self) -> &str {
        "PublicIpRule"
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        let ip = vector.ip_address.as_deref()?.trim();
        if ip.is_empty() || is_loopback(ip) {
            return None;
        }
        Some(Tip::new(
            AdvisoryKind::PublicIp,
            "Hide Your IP",
            "Your ISP tracks your activity. Consider using a VPN.",
        ))
    }
}

/// Unknown status stays silent: detection was not conclusive
pub struct AdBlockRule;

impl AdvisoryRule for AdBlockRule {
    fn name(&self) -> &str {
        "AdBlockRule"
    }

    fn advanced_only(&self) -> bool {
        true
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        match vector.ad_block_status {
            AdBlockStatus::Disabled => Some(Tip::new(
                AdvisoryKind::AdBlockMissing,
                "Block Trackers",
                "No AdBlock detected. Install uBlock Origin to stop trackers.",
            )),
            AdBlockStatus::Enabled => Some(Tip::new(
                AdvisoryKind::AdBlockActive,
                "Tracker Protection Active",
                "An ad and tracker blocker is active. Keep its filter lists updated.",
            )),
            AdBlockStatus::Unknown => None,
        }
    }
}

pub struct BrowserVersionRule {
    versions: MaintainedVersions,
}

impl BrowserVersionRule {
    pub fn new(versions: MaintainedVersions) -> Self {
        Self { versions }
    }
}

impl AdvisoryRule for BrowserVersionRule {
    fn name(&self) -> &str {
        "BrowserVersionRule"
    }

    fn advanced_only(&self) -> bool {
        true
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        let version = vector.browser_version_number?;
        let family = vector.browser_name.as_deref().and_then(BrowserFamily::detect);

        match family {
            Some(family) if self.versions.is_outdated(family, version) => Some(Tip::new(
                AdvisoryKind::BrowserOutdated,
                "Update Browser Now",
                format!(
                    "{} {} no longer receives security fixes (minimum maintained: {}). Update immediately.",
                    family.display_name(),
                    version,
                    self.versions.minimum_for(family)
                ),
            )),
            Some(family) => Some(Tip::new(
                AdvisoryKind::BrowserUpToDate,
                "Browser Up To Date",
                format!(
                    "{} {} is still maintained. Keep automatic updates on.",
                    family.display_name(),
                    version
                ),
            )),
            None => Some(Tip::new(
                AdvisoryKind::BrowserUpToDate,
                "Browser Up To Date",
                format!("Version {} detected. Keep automatic updates on.", version),
            )),
        }
    }
}

pub struct GpuFingerprintRule;

impl AdvisoryRule for GpuFingerprintRule {
    fn name(&self) -> &str {
        "GpuFingerprintRule"
    }

    fn advanced_only(&self) -> bool {
        true
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        vector.hardware_gpu().map(|_| {
            Tip::new(
                AdvisoryKind::GpuFingerprint,
                "GPU Fingerprint",
                "Your GPU model can be used to track you across the web.",
            )
        })
    }
}

pub struct ThemePreferenceRule;

impl AdvisoryRule for ThemePreferenceRule {
    fn name(&self) -> &str {
        "ThemePreferenceRule"
    }

    fn advanced_only(&self) -> bool {
        true
    }

    fn evaluate(&self, vector: &SignalVector, _score: &EntropyEstimate) -> Option<Tip> {
        vector.dark_mode.map(|_| {
            Tip::new(
                AdvisoryKind::ThemeTracked,
                "Theme Preference Tracked",
                "Your light/dark theme preference is visible to sites and adds to your fingerprint.",
            )
        })
    }
}

pub struct UniquenessRule;

impl AdvisoryRule for UniquenessRule {
    fn name(&self) -> &str {
        "UniquenessRule"
    }

    fn advanced_only(&self) -> bool {
        true
    }

    fn evaluate(&self, _vector: &SignalVector, score: &EntropyEstimate) -> Option<Tip> {
        match score.tier {
            UniquenessTier::High => Some(Tip::new(
                AdvisoryKind::HighUniqueness,
                "Use Tor Browser",
                format!(
                    "Your device is highly unique (~{} bits). Tor Browser makes every visitor look the same.",
                    score.bits
                ),
            )),
            UniquenessTier::Medium => Some(Tip::new(
                AdvisoryKind::MediumUniqueness,
                "Install Privacy Extensions",
                "Your device is fairly distinguishable. Privacy Badger or CanvasBlocker limit what sites can read.",
            )),
            UniquenessTier::Low => None,
        }
    }
}

/// Rules 1-9 in their fixed evaluation order
pub fn builtin_rules(versions: MaintainedVersions) -> Vec<Box<dyn AdvisoryRule>> {
    vec![
        Box::new(InsecureTransportRule),
        Box::new(ChromeBrowserRule),
        Box::new(WindowsTelemetryRule),
        Box::new(PublicIpRule),
        Box::new(AdBlockRule),
        Box::new(BrowserVersionRule::new(versions)),
        Box::new(GpuFingerprintRule),
        Box::new(ThemePreferenceRule),
        Box::new(UniquenessRule),
    ]
}

// ============================================================================
// FALLBACK & DEFAULTS
// ============================================================================

/// Basic scans with fewer advisories than this get the generic tip
pub const FALLBACK_MIN_ADVISORIES: usize = 2;

pub fn fallback_tip() -> Tip {
    Tip::new(
        AdvisoryKind::GenericTrackerBlocking,
        "Block Trackers",
        "Install uBlock Origin to block ads and trackers.",
    )
}

/// General best practices shown before any scan
pub fn default_tips() -> [Tip; 4] {
    [
        Tip::new(AdvisoryKind::DefaultVpn, "Use a VPN", "Hide your IP address from trackers."),
        Tip::new(
            AdvisoryKind::DefaultBrowserUpdates,
            "Update Browser",
            "Keep your browser updated for security.",
        ),
        Tip::new(
            AdvisoryKind::DefaultPasswordManager,
            "Strong Passwords",
            "Use a password manager.",
        ),
        Tip::new(
            AdvisoryKind::DefaultTwoFactor,
            "2FA",
            "Enable Two-Factor Authentication everywhere.",
        ),
    ]
}

// ============================================================================
// HELPERS
// ============================================================================

fn contains_ignore_case(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

fn is_loopback(ip: &str) -> bool {
    if ip.eq_ignore_ascii_case("localhost") {
        return true;
    }
    // ::ffff:127.0.0.1 too
    ip.parse::<IpAddr>()
        .map(|addr| addr.to_canonical().is_loopback())
        .unwrap_or(false)
}

// ============================================================================
// TESTS
// ============================================================================
