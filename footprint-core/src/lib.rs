//! whoMi Footprint Core
//!
//! Digital footprint checker: collects device signals, estimates how
//! identifying they are and produces ranked privacy advisories.

pub mod constants;
pub mod logic;

pub use logic::advisory::{advise, default_advisories, Advisory, AdvisoryEngine, AdvisoryKind, AdvisoryList};
pub use logic::config::CoreConfig;
pub use logic::entropy::{score, EntropyEstimate, UniquenessTier};
pub use logic::scan::{ChannelState, ChannelStatus, ScanError, ScanOrchestrator, SessionSnapshot, Trigger};
pub use logic::service::{HttpScanService, ScanService, ServiceError};
pub use logic::signals::{AdvancedSignals, HostSignalSource, ScanMode, SignalSource, SignalVector};
