//! Error types for Chatpane

use thiserror::Error;

/// Main error type for Chatpane operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// HTTP transport failed (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, for logging
        body: String,
    },

    /// Payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Clipboard unavailable or write rejected
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Real-time channel is closed or not connected
    #[error("Channel error: {0}")]
    Channel(String),

    /// WebSocket handshake or framing error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] Box<tokio_tungstenite::tungstenite::Error>),

    /// Configuration value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::Clipboard("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard error: no display");
    }

    #[test]
    fn test_status_display() {
        let err = ChatError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 401: unauthorized");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ChatError = json_err.into();
        assert!(matches!(err, ChatError::Decode(_)));
    }
}
