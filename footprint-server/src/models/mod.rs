//! Data models

pub mod breach;
pub mod device;
pub mod prediction;

pub use breach::*;
pub use device::*;
pub use prediction::*;
