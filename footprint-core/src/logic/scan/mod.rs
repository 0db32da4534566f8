//! Scan Orchestration
//!
//! Session state machine over the device and breach channels.

pub mod channel;
pub mod error;
pub mod session;
pub mod orchestrator;

pub use channel::{ChannelState, ChannelStatus};
pub use error::{mask_email, validate_email, ScanError};
pub use session::{DeviceReport, ScanSession, SessionSnapshot};
pub use orchestrator::{ScanOrchestrator, Trigger};
