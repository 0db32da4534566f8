//! Entropy Module
//!
//! Coarse "how unique is this device" estimate.
//!
//! ## Structure
//! - `types`: EntropyEstimate, UniquenessTier, DistinguishingFactor
//! - `rules`: Fixed thresholds and weights
//! - `scorer`: Scoring logic
//!
//! ## Usage
//! ```ignore
//! use footprint_core::logic::entropy::{score, UniquenessTier};
//!
//! let estimate = score(&vector);
//! if estimate.tier == UniquenessTier::High {
//!     warn_user();
//! }
//! ```

pub mod types;
pub mod rules;
pub mod scorer;

pub use types::{DistinguishingFactor, EntropyEstimate, UniquenessTier};

pub use scorer::score;
