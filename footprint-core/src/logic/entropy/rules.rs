//! Entropy Thresholds & Weights
//!
//! Fixed constants for the uniqueness heuristic.
//! These are NOT derived from population statistics - the estimate is a
//! coarse, explainable heuristic, not a calibrated privacy metric.

// ============================================================================
// FACTOR THRESHOLDS
// ============================================================================

/// Pixel area above which a screen counts as distinguishing (1920x1080)
pub const RESOLUTION_AREA_THRESHOLD: u64 = 2_073_600;

/// Color depth above this is uncommon
pub const COLOR_DEPTH_THRESHOLD: u32 = 24;

/// More logical cores than this is uncommon
pub const HARDWARE_CONCURRENCY_THRESHOLD: u32 = 8;

/// More memory than this is uncommon (GB)
pub const DEVICE_MEMORY_THRESHOLD_GB: f32 = 8.0;

// ============================================================================
// WEIGHT & TIERS
// ============================================================================

/// Bits contributed by every distinguishing factor
pub const BITS_PER_FACTOR: u32 = 2;

/// Below this = Low
pub const MEDIUM_TIER_MIN_BITS: u32 = 8;

/// At or above this = High, between = Medium
pub const HIGH_TIER_MIN_BITS: u32 = 14;

/// Number of factor predicates
pub const FACTOR_COUNT: usize = 8;
