//! System clipboard via arboard

use chatpane_core::{ChatError, ChatResult, ClipboardWriter};

/// Cross-platform desktop clipboard.
///
/// A fresh `arboard::Clipboard` is opened per write; holding one open across
/// the app lifetime keeps clipboard ownership on some X11 setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopClipboard;

impl ClipboardWriter for DesktopClipboard {
    fn write_text(&self, text: &str) -> ChatResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ChatError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ChatError::Clipboard(e.to_string()))
    }
}
