//! Entropy Types
//!
//! Derived uniqueness estimate. Never stored, always recomputed
//! from a SignalVector.

use serde::{Deserialize, Serialize};

use super::rules::{BITS_PER_FACTOR, HIGH_TIER_MIN_BITS, MEDIUM_TIER_MIN_BITS};

// ============================================================================
// UNIQUENESS TIER
// ============================================================================

/// How distinguishing a fingerprint is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum UniquenessTier {
    #[default]
    Low,
    Medium,
    High,
}

impl UniquenessTier {
    pub fn from_bits(bits: u32) -> Self {
        if bits >= HIGH_TIER_MIN_BITS {
            UniquenessTier::High
        } else if bits >= MEDIUM_TIER_MIN_BITS {
            UniquenessTier::Medium
        } else {
            UniquenessTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UniquenessTier::Low => "low",
            UniquenessTier::Medium => "medium",
            UniquenessTier::High => "high",
        }
    }
}

impl std::fmt::Display for UniquenessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DISTINGUISHING FACTORS
// ============================================================================

/// One of the eight predicates the scorer evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistinguishingFactor {
    HighResolution,
    DeepColor,
    ManyCores,
    LargeMemory,
    HardwareGpu,
    ManyPlugins,
    ThemePreference,
    CanvasHash,
}

impl DistinguishingFactor {
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighResolution => "Screen larger than 1080p",
            Self::DeepColor => "Color depth above 24 bits",
            Self::ManyCores => "More than 8 CPU cores",
            Self::LargeMemory => "More than 8 GB of memory",
            Self::HardwareGpu => "GPU model exposed",
            Self::ManyPlugins => "Many browser plugins/extensions",
            Self::ThemePreference => "Color scheme preference exposed",
            Self::CanvasHash => "Canvas rendering hash available",
        }
    }
}

// ============================================================================
// ENTROPY ESTIMATE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntropyEstimate {
    pub distinguishing_factor_count: u32,
    pub bits: u32,
    pub tier: UniquenessTier,
    /// Factors that fired, in predicate order
    pub factors: Vec<DistinguishingFactor>,
}

impl EntropyEstimate {
    pub fn from_factors(factors: Vec<DistinguishingFactor>) -> Self {
        let count = factors.len() as u32;
        let bits = count * BITS_PER_FACTOR;
        Self {
            distinguishing_factor_count: count,
            bits,
            tier: UniquenessTier::from_bits(bits),
            factors,
        }
    }
}
