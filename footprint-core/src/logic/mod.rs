//! Logic Module - Scoring, Advisories & Orchestration
//!
//! Data flows one way: signals -> entropy score -> advisories -> snapshot.
//!
//! - `signals/` - Signal vector model and collectors
//! - `entropy/` - Uniqueness scoring
//! - `advisory/` - Ordered privacy advisory rules
//! - `scan/` - Session state machine over the device and breach channels
//! - `service/` - HTTP client for the scan service

pub mod config;
pub mod signals;
pub mod entropy;
pub mod advisory;
pub mod service;
pub mod scan;
