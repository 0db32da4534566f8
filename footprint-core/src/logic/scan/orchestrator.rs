//! Scan Orchestrator
//!
//! Drives the two channels. Each trigger runs its operation to completion
//! and records the outcome in the session; the session lock is only taken
//! for state transitions, never across an await.

use std::sync::Arc;

use parking_lot::Mutex;

use super::channel::ChannelState;
use super::error::{mask_email, validate_email, ScanError};
use super::session::{DeviceReport, ScanSession, SessionSnapshot};
use crate::logic::advisory::AdvisoryEngine;
use crate::logic::entropy::score;
use crate::logic::service::{BreachResult, ScanService};
use crate::logic::signals::{ScanMode, SignalSource, SignalVector};

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The operation ran; the channel is now Ready or Failed
    Started,
    /// The channel was already loading, nothing happened
    AlreadyLoading,
    /// Local validation failed; the channel is Failed without a network call
    Rejected,
}

pub struct ScanOrchestrator {
    service: Arc<dyn ScanService>,
    signals: Arc<dyn SignalSource>,
    engine: AdvisoryEngine,
    connection_secure: Option<bool>,
    session: Mutex<ScanSession>,
}

impl ScanOrchestrator {
    pub fn new(service: Arc<dyn ScanService>, signals: Arc<dyn SignalSource>) -> Self {
        Self {
            service,
            signals,
            engine: AdvisoryEngine::new(),
            connection_secure: None,
            session: Mutex::new(ScanSession::new()),
        }
    }

    /// Transport observation folded into every device report
    pub fn with_connection_secure(mut self, secure: Option<bool>) -> Self {
        self.connection_secure = secure;
        self
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().snapshot()
    }

    // ========================================================================
    // DEVICE CHANNEL
    // ========================================================================

    pub async fn start_device_scan(&self, mode: ScanMode) -> Trigger {
        {
            let mut session = self.session.lock();
            if session.device.is_loading() {
                log::debug!("Device scan already in progress, ignoring trigger");
                return Trigger::AlreadyLoading;
            }
            session.mode = mode;
            session.device = ChannelState::Loading;
        }

        log::info!("Starting {} device scan", mode);
        let outcome = self.run_device_scan(mode).await;

        let mut session = self.session.lock();
        session.device = match outcome {
            Ok(report) => {
                log::info!(
                    "Device scan complete: tier {}, {} advisories",
                    report.entropy.tier,
                    report.advisories.len()
                );
                ChannelState::Ready(report)
            }
            Err(e) => {
                log::warn!("Device scan failed: {}", e);
                ChannelState::Failed(e.to_string())
            }
        };
        Trigger::Started
    }

    async fn run_device_scan(&self, mode: ScanMode) -> Result<DeviceReport, ScanError> {
        let advanced = if mode.is_advanced() {
            let collected = self.signals.collect_advanced().await;
            log::debug!(
                "Collected {} advanced signals via {}",
                collected.observed_count(),
                self.signals.name()
            );
            Some(collected)
        } else {
            None
        };

        let response = self.service.device_scan(advanced.as_ref()).await?;

        let mut vector = SignalVector::from_device(&response.device_info)
            .with_connection_secure(self.connection_secure);
        if let Some(signals) = advanced {
            vector = vector.with_advanced(signals);
        }

        let entropy = score(&vector);
        let advisories = self.engine.advise(&vector, &entropy);

        Ok(DeviceReport {
            scan_id: response.scan_id,
            signals: vector,
            entropy,
            advisories,
        })
    }

    // ========================================================================
    // BREACH CHANNEL
    // ========================================================================

    pub async fn start_breach_check(&self, email: &str) -> Trigger {
        let email = {
            let mut session = self.session.lock();
            if session.breach.is_loading() {
                log::debug!("Breach check already in progress, ignoring trigger");
                return Trigger::AlreadyLoading;
            }
            session.breach_query = email.to_string();

            match validate_email(email) {
                Ok(valid) => {
                    session.breach = ChannelState::Loading;
                    valid
                }
                Err(e) => {
                    session.breach = ChannelState::Failed(e.to_string());
                    return Trigger::Rejected;
                }
            }
        };

        log::info!("Checking breaches for {}", mask_email(&email));
        let outcome: Result<BreachResult, ScanError> = self
            .service
            .breach_check(&email)
            .await
            .map_err(ScanError::from);

        let mut session = self.session.lock();
        session.breach = match outcome {
            Ok(result) => {
                log::info!("Breach check complete: {} breach(es)", result.breaches.len());
                ChannelState::Ready(result)
            }
            Err(e) => {
                log::warn!("Breach check failed: {}", e);
                ChannelState::Failed(e.to_string())
            }
        };
        Trigger::Started
    }
}

// ============================================================================
// TESTS
// ============================================================================
