//! Scan Service Module
//!
//! Boundary to the remote device-scan / breach-check service.

pub mod types;
pub mod error;
pub mod client;

pub use types::{
    Breach,
    BreachCheckRequest,
    BreachResult,
    DeviceInfo,
    DeviceScanResponse,
    ErrorResponse,
    HealthResponse,
};

pub use error::ServiceError;

pub use client::{HttpScanService, ScanService};
