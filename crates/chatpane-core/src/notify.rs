//! Transient notifications
//!
//! Toasts carry their own lifetime; the shell removes each one when it expires.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            duration,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            duration,
        }
    }

    pub fn copied() -> Self {
        Self::success("Message copied!", Duration::from_secs(2))
    }

    pub fn copy_failed() -> Self {
        Self::error("Failed to copy message", Duration::from_secs(2))
    }

    pub fn deleted() -> Self {
        Self::success("Message deleted successfully", Duration::from_secs(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_toasts() {
        assert_eq!(Toast::copied().duration, Duration::from_secs(2));
        assert_eq!(Toast::copy_failed().kind, ToastKind::Error);
        assert_eq!(Toast::deleted().duration, Duration::from_secs(3));
        assert_eq!(Toast::deleted().message, "Message deleted successfully");
    }
}
