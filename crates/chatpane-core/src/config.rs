//! Client configuration
//!
//! Defaults match a chat server running locally. The desktop shell overrides
//! fields from command-line arguments and then calls [`ChatConfig::validate`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::{COPY_FEEDBACK, SCROLL_FLAG};
use crate::error::{ChatError, ChatResult};
use crate::viewport::MOBILE_BREAKPOINT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the chat HTTP API
    pub api_base: String,
    /// WebSocket endpoint of the real-time channel
    pub socket_url: String,
    /// Session token sent as the `jwt` cookie
    pub session_token: Option<String>,
    /// Width (logical px) below which the layout is mobile
    pub mobile_breakpoint: f64,
    /// Treat the device as touch-capable regardless of width
    pub touch_capable: bool,
    /// Copied-indicator lifetime in milliseconds
    pub copy_feedback_ms: u64,
    /// Scrolling-flag lifetime in milliseconds
    pub scroll_flag_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8747".to_string(),
            socket_url: "ws://localhost:8747/socket".to_string(),
            session_token: None,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            touch_capable: false,
            copy_feedback_ms: COPY_FEEDBACK.as_millis() as u64,
            scroll_flag_ms: SCROLL_FLAG.as_millis() as u64,
        }
    }
}

impl ChatConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn scroll_flag(&self) -> Duration {
        Duration::from_millis(self.scroll_flag_ms)
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> ChatResult<()> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ChatError::InvalidConfig(format!(
                "api_base must be an http(s) URL, got {}",
                self.api_base
            )));
        }
        if !(self.socket_url.starts_with("ws://") || self.socket_url.starts_with("wss://")) {
            return Err(ChatError::InvalidConfig(format!(
                "socket_url must be a ws(s) URL, got {}",
                self.socket_url
            )));
        }
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return Err(ChatError::InvalidConfig(
                "mobile_breakpoint must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
