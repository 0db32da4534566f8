//! Signal Source
//!
//! The capability that reads advanced signals from the runtime environment.
//! Scoring and advisory logic never touch the environment directly - they
//! only see what a `SignalSource` hands to the orchestrator.

use async_trait::async_trait;

use super::types::AdvancedSignals;

// ============================================================================
// SIGNAL SOURCE TRAIT
// ============================================================================

/// Reads advanced fingerprint signals.
///
/// Collection never fails as a whole: a signal that cannot be read is left
/// unknown in the returned `AdvancedSignals`.
#[async_trait]
pub trait SignalSource: Send + Sync {
    fn name(&self) -> &str;
    async fn collect_advanced(&self) -> AdvancedSignals;
}

// ============================================================================
// STATIC SOURCE
// ============================================================================

/// Source that always returns the same signals.
/// Used to replay signals captured elsewhere (e.g. from a browser).
#[derive(Debug, Clone, Default)]
pub struct StaticSignalSource {
    signals: AdvancedSignals,
}

impl StaticSignalSource {
    pub fn new(signals: AdvancedSignals) -> Self {
        Self { signals }
    }

    /// Load captured signals from JSON
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

#[async_trait]
impl SignalSource for StaticSignalSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn collect_advanced(&self) -> AdvancedSignals {
        self.signals.clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
