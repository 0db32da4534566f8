//! Advisory Types
//!
//! Core types for privacy recommendations.
//! No rule logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// ADVISORY KIND
// ============================================================================

/// Stable identifier of an advisory, independent of its wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    InsecureTransport,
    ChromeBrowser,
    WindowsTelemetry,
    PublicIp,
    AdBlockMissing,
    AdBlockActive,
    BrowserOutdated,
    BrowserUpToDate,
    GpuFingerprint,
    ThemeTracked,
    HighUniqueness,
    MediumUniqueness,
    GenericTrackerBlocking,
    DefaultVpn,
    DefaultBrowserUpdates,
    DefaultPasswordManager,
    DefaultTwoFactor,
}

impl AdvisoryKind {
    /// Positive confirmations rather than things to fix
    pub fn is_confirmation(&self) -> bool {
        matches!(self, AdvisoryKind::AdBlockActive | AdvisoryKind::BrowserUpToDate)
    }
}

// ============================================================================
// TIP (rule output, not yet ranked)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub kind: AdvisoryKind,
    pub title: String,
    pub body: String,
}

impl Tip {
    pub fn new(kind: AdvisoryKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

// ============================================================================
// ADVISORY
// ============================================================================

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// 1-based, assigned by emission order
    pub rank: u32,
    pub kind: AdvisoryKind,
    pub title: String,
    pub body: String,
}

// ============================================================================
// ADVISORY LIST
// ============================================================================

/// Ordered advisories with contiguous ranks 1..=N.
/// Ranks are only ever assigned by `push`, so gaps cannot appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryList {
    items: Vec<Advisory>,
}

impl AdvisoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tip with the next rank.
    /// Returns false (and appends nothing) if the same kind is already listed.
    pub fn push(&mut self, tip: Tip) -> bool {
        if self.contains(tip.kind) {
            return false;
        }
        let rank = self.items.len() as u32 + 1;
        self.items.push(Advisory {
            rank,
            kind: tip.kind,
            title: tip.title,
            body: tip.body,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, kind: AdvisoryKind) -> bool {
        self.items.iter().any(|a| a.kind == kind)
    }

    pub fn kinds(&self) -> Vec<AdvisoryKind> {
        self.items.iter().map(|a| a.kind).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Advisory> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Advisory] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a AdvisoryList {
    type Item = &'a Advisory;
    type IntoIter = std::slice::Iter<'a, Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_ranks() {
        let mut list = AdvisoryList::new();
        list.push(Tip::new(AdvisoryKind::PublicIp, "a", "b"));
        list.push(Tip::new(AdvisoryKind::GpuFingerprint, "c", "d"));
        let ranks: Vec<u32> = list.iter().map(|a| a.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_push_skips_duplicate_kind() {
        let mut list = AdvisoryList::new();
        assert!(list.push(Tip::new(AdvisoryKind::PublicIp, "a", "b")));
        assert!(!list.push(Tip::new(AdvisoryKind::PublicIp, "again", "b")));
        assert!(list.push(Tip::new(AdvisoryKind::ThemeTracked, "c", "d")));
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].rank, 2);
    }

    #[test]
    fn test_confirmations() {
        assert!(AdvisoryKind::AdBlockActive.is_confirmation());
        assert!(AdvisoryKind::BrowserUpToDate.is_confirmation());
        assert!(!AdvisoryKind::AdBlockMissing.is_confirmation());
        assert!(!AdvisoryKind::DefaultVpn.is_confirmation());
    }

    #[test]
    fn test_list_serializes_as_array() {
        let mut list = AdvisoryList::new();
        list.push(Tip::new(AdvisoryKind::DefaultTwoFactor, "2FA", "Enable it"));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["rank"], 1);
        assert_eq!(json[0]["kind"], "default_two_factor");
    }
}
