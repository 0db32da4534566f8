//! Channel State
//!
//! One independent async operation track: `Idle -> Loading -> Ready | Failed`.
//! A tagged variant so that "loading with a stale error" or "ready with an
//! error" cannot be represented.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl ChannelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelStatus::Idle => "idle",
            ChannelStatus::Loading => "loading",
            ChannelStatus::Ready => "ready",
            ChannelStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChannelState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// User-facing message
    Failed(String),
}

impl<T> ChannelState<T> {
    pub fn status(&self) -> ChannelStatus {
        match self {
            ChannelState::Idle => ChannelStatus::Idle,
            ChannelState::Loading => ChannelStatus::Loading,
            ChannelState::Ready(_) => ChannelStatus::Ready,
            ChannelState::Failed(_) => ChannelStatus::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChannelState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChannelState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ChannelState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
