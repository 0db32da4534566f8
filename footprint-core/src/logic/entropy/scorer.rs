//! Entropy Scorer
//!
//! ONLY scoring logic - no types, no advisories.
//! Input: SignalVector
//! Output: EntropyEstimate

use crate::logic::signals::SignalVector;
use super::rules::{
    COLOR_DEPTH_THRESHOLD, DEVICE_MEMORY_THRESHOLD_GB, HARDWARE_CONCURRENCY_THRESHOLD,
    RESOLUTION_AREA_THRESHOLD,
};
use super::types::{DistinguishingFactor, EntropyEstimate};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Estimate how distinguishing a fingerprint is.
///
/// Pure and total: absent signals simply do not contribute, and
/// non-advanced vectors (basic or no-scan) always score zero factors.
pub fn score(vector: &SignalVector) -> EntropyEstimate {
    if !vector.is_advanced() {
        return EntropyEstimate::from_factors(Vec::new());
    }

    let checks = [
        (DistinguishingFactor::HighResolution, high_resolution(vector)),
        (
            DistinguishingFactor::DeepColor,
            vector.color_depth_bits.is_some_and(|d| d > COLOR_DEPTH_THRESHOLD),
        ),
        (
            DistinguishingFactor::ManyCores,
            vector
                .hardware_concurrency
                .is_some_and(|c| c > HARDWARE_CONCURRENCY_THRESHOLD),
        ),
        (
            DistinguishingFactor::LargeMemory,
            vector
                .device_memory_gb
                .is_some_and(|m| m > DEVICE_MEMORY_THRESHOLD_GB),
        ),
        (DistinguishingFactor::HardwareGpu, vector.hardware_gpu().is_some()),
        (DistinguishingFactor::ManyPlugins, vector.many_plugins == Some(true)),
        // Presence counts, not the value
        (DistinguishingFactor::ThemePreference, vector.dark_mode.is_some()),
        (DistinguishingFactor::CanvasHash, vector.canvas_hash().is_some()),
    ];

    let factors = checks
        .into_iter()
        .filter(|(_, fired)| *fired)
        .map(|(factor, _)| factor)
        .collect();

    EntropyEstimate::from_factors(factors)
}

fn high_resolution(vector: &SignalVector) -> bool {
    vector
        .resolution()
        .is_some_and(|(w, h)| (w as u64) * (h as u64) > RESOLUTION_AREA_THRESHOLD)
}

// ============================================================================
// TESTS
// ============================================================================
