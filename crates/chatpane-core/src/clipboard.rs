//! Clipboard seam
//!
//! The desktop shell provides the platform clipboard; tests provide their own.

use crate::error::ChatResult;

/// Write-only access to the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> ChatResult<()>;
}

