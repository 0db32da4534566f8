//! Scan Session
//!
//! In-memory state for one user session: the selected mode plus the two
//! independent channels. Never persisted.

use serde::Serialize;

use super::channel::{ChannelState, ChannelStatus};
use crate::logic::advisory::{default_advisories, AdvisoryList};
use crate::logic::entropy::EntropyEstimate;
use crate::logic::service::BreachResult;
use crate::logic::signals::{ScanMode, SignalVector};

/// Ready payload of the device channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceReport {
    pub scan_id: Option<String>,
    pub signals: SignalVector,
    pub entropy: EntropyEstimate,
    pub advisories: AdvisoryList,
}

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    pub mode: ScanMode,
    pub device: ChannelState<DeviceReport>,
    /// Last email the user submitted, as typed
    pub breach_query: String,
    pub breach: ChannelState<BreachResult>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories to present: the device report's list when ready,
    /// otherwise the four defaults.
    pub fn advisories(&self) -> AdvisoryList {
        match self.device.ready() {
            Some(report) => report.advisories.clone(),
            None => default_advisories(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let report = self.device.ready();
        SessionSnapshot {
            mode: self.mode,
            device_status: self.device.status(),
            device_error: self.device.error().map(String::from),
            scan_id: report.and_then(|r| r.scan_id.clone()),
            signals: report.map(|r| r.signals.clone()),
            entropy: report.map(|r| r.entropy.clone()),
            advisories: self.advisories(),
            breach_query: self.breach_query.clone(),
            breach_status: self.breach.status(),
            breach_error: self.breach.error().map(String::from),
            breach: self.breach.ready().cloned(),
        }
    }
}

/// Read-only view handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mode: ScanMode,
    pub device_status: ChannelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<SignalVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<EntropyEstimate>,
    pub advisories: AdvisoryList,
    pub breach_query: String,
    pub breach_status: ChannelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach: Option<BreachResult>,
}
