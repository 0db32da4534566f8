//! Advisory Engine
//!
//! ONLY evaluation logic - rules live in `rules.rs`.
//! Input: SignalVector + EntropyEstimate
//! Output: AdvisoryList
//!
//! Evaluation is a single top-to-bottom pass. Every rule runs at most once
//! and appends at most one advisory, so the output is fully determined by
//! the input.

use once_cell::sync::Lazy;

use super::rules::{builtin_rules, default_tips, fallback_tip, AdvisoryRule, FALLBACK_MIN_ADVISORIES};
use super::types::AdvisoryList;
use super::versions::MaintainedVersions;
use crate::logic::entropy::EntropyEstimate;
use crate::logic::signals::SignalVector;

static DEFAULT_ENGINE: Lazy<AdvisoryEngine> = Lazy::new(AdvisoryEngine::new);

// ============================================================================
// MAIN ADVISE FUNCTION
// ============================================================================

/// Advise with the built-in rule set
pub fn advise(vector: &SignalVector, score: &EntropyEstimate) -> AdvisoryList {
    DEFAULT_ENGINE.advise(vector, score)
}

/// The fixed list shown before any scan
pub fn default_advisories() -> AdvisoryList {
    let mut list = AdvisoryList::new();
    for tip in default_tips() {
        list.push(tip);
    }
    list
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct AdvisoryEngine {
    rules: Vec<Box<dyn AdvisoryRule>>,
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryEngine {
    /// Built-in rules with the default maintained-versions table
    pub fn new() -> Self {
        Self::with_versions(MaintainedVersions::default())
    }

    /// Built-in rules with a custom maintained-versions table
    pub fn with_versions(versions: MaintainedVersions) -> Self {
        Self {
            rules: builtin_rules(versions),
        }
    }

    /// Custom ordered rule set (fallback and no-scan handling still apply)
    pub fn with_rules(rules: Vec<Box<dyn AdvisoryRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn advise(&self, vector: &SignalVector, score: &EntropyEstimate) -> AdvisoryList {
        // Nothing scanned yet: general best practices only
        if vector.is_no_scan() {
            return default_advisories();
        }

        let mut list = AdvisoryList::new();

        for rule in &self.rules {
            if rule.advanced_only() && !vector.is_advanced() {
                continue;
            }
            if let Some(tip) = rule.evaluate(vector, score) {
                log::trace!("Advisory rule {} matched: {:?}", rule.name(), tip.kind);
                list.push(tip);
            }
        }

        if vector.is_basic() && list.len() < FALLBACK_MIN_ADVISORIES {
            list.push(fallback_tip());
        }

        log::debug!(
            "Advised {} tip(s) for {} scan (tier {})",
            list.len(),
            vector.mode().map(|m| m.as_str()).unwrap_or("no"),
            score.tier
        );

        list
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::advisory::types::{AdvisoryKind, Tip};
    use crate::logic::entropy::{score, UniquenessTier};
    use crate::logic::signals::AdBlockStatus;

    fn run(vector: &SignalVector) -> AdvisoryList {
        advise(vector, &score(vector))
    }

    fn assert_contiguous(list: &AdvisoryList) {
        for (i, advisory) in list.iter().enumerate() {
            assert_eq!(advisory.rank as usize, i + 1);
        }
    }

    /// Every combination of the fields that drive rules
    fn vector_grid() -> Vec<SignalVector> {
        let mut out = Vec::new();
        let modes = [None, Some(false), Some(true)];
        let ips = [None, Some("127.0.0.1"), Some("203.0.113.9")];
        let browsers = [None, Some("Google Chrome"), Some("Mozilla Firefox")];
        let oses = [None, Some("Windows 10/11"), Some("Linux")];
        let ad_blocks = [AdBlockStatus::Enabled, AdBlockStatus::Disabled, AdBlockStatus::Unknown];
        let secure = [None, Some(true), Some(false)];

        for mode in modes {
            for ip in ips {
                for browser in browsers {
                    for os in oses {
                        for ad_block in ad_blocks {
                            for conn in secure {
                                out.push(SignalVector {
                                    is_advanced: mode,
                                    ip_address: ip.map(String::from),
                                    browser_name: browser.map(String::from),
                                    os_name: os.map(String::from),
                                    ad_block_status: ad_block,
                                    connection_secure: conn,
                                    browser_version_number: Some(99),
                                    gpu_model: Some("NVIDIA GeForce RTX 4090".to_string()),
                                    dark_mode: Some(true),
                                    ..Default::default()
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_no_scan_returns_defaults() {
        let list = run(&SignalVector::no_scan());
        assert_eq!(
            list.kinds(),
            vec![
                AdvisoryKind::DefaultVpn,
                AdvisoryKind::DefaultBrowserUpdates,
                AdvisoryKind::DefaultPasswordManager,
                AdvisoryKind::DefaultTwoFactor,
            ]
        );
        assert_contiguous(&list);
    }

    #[test]
    fn test_no_scan_ignores_other_fields() {
        let vector = SignalVector {
            is_advanced: None,
            ip_address: Some("203.0.113.9".to_string()),
            browser_name: Some("Google Chrome".to_string()),
            connection_secure: Some(false),
            ad_block_status: AdBlockStatus::Disabled,
            ..Default::default()
        };
        let high = EntropyEstimate {
            tier: UniquenessTier::High,
            bits: 16,
            distinguishing_factor_count: 8,
            factors: vec![],
        };
        assert_eq!(advise(&vector, &high), default_advisories());
        assert_eq!(advise(&vector, &high).len(), 4);
    }

    #[test]
    fn test_scenario_chrome_advanced() {
        let vector = SignalVector {
            is_advanced: Some(true),
            ad_block_status: AdBlockStatus::Disabled,
            browser_name: Some("Chrome".to_string()),
            browser_version_number: Some(130),
            gpu_model: Some("Unknown GPU".to_string()),
            dark_mode: Some(false),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![
                AdvisoryKind::ChromeBrowser,
                AdvisoryKind::AdBlockMissing,
                AdvisoryKind::BrowserUpToDate,
                AdvisoryKind::ThemeTracked,
            ]
        );
        let titles: Vec<&str> = list.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Consider Firefox", "Block Trackers", "Browser Up To Date", "Theme Preference Tracked"]
        );
    }

    #[test]
    fn test_scenario_chrome_advanced_with_http_and_public_ip() {
        let vector = SignalVector {
            is_advanced: Some(true),
            ad_block_status: AdBlockStatus::Disabled,
            browser_name: Some("Chrome".to_string()),
            browser_version_number: Some(130),
            gpu_model: Some("Unknown GPU".to_string()),
            dark_mode: Some(false),
            connection_secure: Some(false),
            ip_address: Some("198.51.100.20".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![
                AdvisoryKind::InsecureTransport,
                AdvisoryKind::ChromeBrowser,
                AdvisoryKind::PublicIp,
                AdvisoryKind::AdBlockMissing,
                AdvisoryKind::BrowserUpToDate,
                AdvisoryKind::ThemeTracked,
            ]
        );
        assert_eq!(list.as_slice()[0].rank, 1);
    }

    #[test]
    fn test_basic_fallback_when_nothing_matches() {
        let vector = SignalVector {
            is_advanced: Some(false),
            browser_name: Some("Mozilla Firefox".to_string()),
            os_name: Some("Linux".to_string()),
            ip_address: Some("127.0.0.1".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(list.kinds(), vec![AdvisoryKind::GenericTrackerBlocking]);
        assert_eq!(list.as_slice()[0].rank, 1);
    }

    #[test]
    fn test_basic_fallback_after_single_match() {
        let vector = SignalVector {
            is_advanced: Some(false),
            ip_address: Some("203.0.113.9".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![AdvisoryKind::PublicIp, AdvisoryKind::GenericTrackerBlocking]
        );
    }

    #[test]
    fn test_basic_no_fallback_with_two_matches() {
        let vector = SignalVector {
            is_advanced: Some(false),
            ip_address: Some("203.0.113.9".to_string()),
            os_name: Some("Windows 10/11".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![AdvisoryKind::WindowsTelemetry, AdvisoryKind::PublicIp]
        );
    }

    #[test]
    fn test_basic_skips_advanced_rules() {
        let vector = SignalVector {
            is_advanced: Some(false),
            ad_block_status: AdBlockStatus::Disabled,
            gpu_model: Some("NVIDIA GeForce RTX 4090".to_string()),
            dark_mode: Some(true),
            browser_version_number: Some(90),
            browser_name: Some("Google Chrome".to_string()),
            os_name: Some("Windows 10/11".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![AdvisoryKind::ChromeBrowser, AdvisoryKind::WindowsTelemetry]
        );
    }

    #[test]
    fn test_advanced_never_gets_fallback() {
        let vector = SignalVector {
            is_advanced: Some(true),
            ..Default::default()
        };
        assert!(run(&vector).is_empty());
    }

    #[test]
    fn test_ad_block_enabled_confirms() {
        let vector = SignalVector {
            is_advanced: Some(true),
            ad_block_status: AdBlockStatus::Enabled,
            ..Default::default()
        };
        assert_eq!(run(&vector).kinds(), vec![AdvisoryKind::AdBlockActive]);
    }

    #[test]
    fn test_high_tier_advises_tor() {
        let vector = SignalVector {
            is_advanced: Some(true),
            screen_resolution: Some("3840x2160".to_string()),
            color_depth_bits: Some(30),
            hardware_concurrency: Some(16),
            device_memory_gb: Some(32.0),
            gpu_model: Some("Apple M3 Max".to_string()),
            many_plugins: Some(true),
            dark_mode: Some(true),
            canvas_hash: Some("9f8e".to_string()),
            ..Default::default()
        };
        let list = run(&vector);
        assert_eq!(
            list.kinds(),
            vec![
                AdvisoryKind::GpuFingerprint,
                AdvisoryKind::ThemeTracked,
                AdvisoryKind::HighUniqueness,
            ]
        );
        assert!(list.as_slice()[2].body.contains("16 bits"));
    }

    #[test]
    fn test_deterministic_and_contiguous_over_grid() {
        for vector in vector_grid() {
            let estimate = score(&vector);
            let first = advise(&vector, &estimate);
            let second = advise(&vector, &estimate);
            assert_eq!(first, second);
            assert_contiguous(&first);
        }
    }

    #[test]
    fn test_unknown_ad_block_is_silent_over_grid() {
        for vector in vector_grid() {
            if vector.ad_block_status != AdBlockStatus::Unknown {
                continue;
            }
            let list = run(&vector);
            assert!(!list.contains(AdvisoryKind::AdBlockMissing));
            assert!(!list.contains(AdvisoryKind::AdBlockActive));
        }
    }

    #[test]
    fn test_basic_with_no_identity_match_always_has_fallback() {
        for vector in vector_grid() {
            if !vector.is_basic() {
                continue;
            }
            let list = run(&vector);
            let matched = list
                .iter()
                .filter(|a| a.kind != AdvisoryKind::GenericTrackerBlocking)
                .count();
            assert_eq!(
                matched < FALLBACK_MIN_ADVISORIES,
                list.contains(AdvisoryKind::GenericTrackerBlocking)
            );
            if matched == 0 {
                assert_eq!(list.kinds(), vec![AdvisoryKind::GenericTrackerBlocking]);
            }
        }
    }

    #[test]
    fn test_custom_rules() {
        struct AlwaysRule;
        impl AdvisoryRule for AlwaysRule {
            fn name(&self) -> &str {
                "AlwaysRule"
            }
            fn evaluate(&self, _v: &SignalVector, _s: &EntropyEstimate) -> Option<Tip> {
                Some(Tip::new(AdvisoryKind::PublicIp, "Always", "Fires every time"))
            }
        }

        // Duplicate rules still produce one advisory
        let engine = AdvisoryEngine::with_rules(vec![Box::new(AlwaysRule), Box::new(AlwaysRule)]);
        assert_eq!(engine.rule_names(), vec!["AlwaysRule", "AlwaysRule"]);

        let vector = SignalVector {
            is_advanced: Some(true),
            ..Default::default()
        };
        let list = engine.advise(&vector, &score(&vector));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_custom_versions_table() {
        let engine = AdvisoryEngine::with_versions(MaintainedVersions {
            chrome: 140,
            ..Default::default()
        });
        let vector = SignalVector {
            is_advanced: Some(true),
            browser_name: Some("Google Chrome".to_string()),
            browser_version_number: Some(130),
            ..Default::default()
        };
        let list = engine.advise(&vector, &score(&vector));
        assert!(list.contains(AdvisoryKind::BrowserOutdated));
    }
}
