//! Signals Module
//!
//! The fixed vocabulary of client-observable signals and the sources
//! that produce them.
//!
//! ## Structure
//! - `types`: SignalVector, AdvancedSignals, ScanMode, AdBlockStatus
//! - `source`: SignalSource trait + static source
//! - `host`: native host source

pub mod types;
pub mod source;
pub mod host;

pub use types::{
    AdBlockStatus,
    AdvancedSignals,
    ScanMode,
    SignalVector,
    is_hardware_gpu,
    parse_resolution,
};

pub use source::{SignalSource, StaticSignalSource};
pub use host::HostSignalSource;
