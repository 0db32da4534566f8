//! Advisory Module
//!
//! Turns a signal vector + entropy estimate into ranked privacy tips.
//!
//! ## Structure
//! - `types`: Advisory, AdvisoryList, AdvisoryKind, Tip
//! - `versions`: Maintained browser versions table
//! - `rules`: AdvisoryRule trait + built-in rules
//! - `engine`: Ordered evaluation
//!
//! ## Usage
//! ```ignore
//! use footprint_core::logic::{advisory, entropy};
//!
//! let estimate = entropy::score(&vector);
//! for tip in &advisory::advise(&vector, &estimate) {
//!     println!("{}. {}", tip.rank, tip.title);
//! }
//! ```

pub mod types;
pub mod versions;
pub mod rules;
pub mod engine;

pub use types::{Advisory, AdvisoryKind, AdvisoryList, Tip};

pub use versions::{BrowserFamily, MaintainedVersions};

pub use rules::AdvisoryRule;

pub use engine::{advise, default_advisories, AdvisoryEngine};
