//! HTTP handlers

pub mod health;
pub mod device;
pub mod breach;
pub mod predict;
