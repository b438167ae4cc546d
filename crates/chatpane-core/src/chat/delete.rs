//! Two-step delete confirmation
//!
//! `Idle` -> `Confirming(message)` -> `Idle`. Confirming emits one
//! `deleteMessage` event and returns immediately; the message leaves the list
//! only when the server broadcasts `messageDeleted` back.

use tracing::{debug, warn};

use super::message::Message;
use crate::channel::{ChannelEvent, DeleteRequest, RealtimeChannel};

/// Maximum characters of content shown in the confirmation preview.
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming(Message),
}

impl DeleteFlow {
    /// Open the dialog for `message`.
    pub fn open(&mut self, message: Message) {
        debug!(message_id = %message.id, "Opening delete confirmation");
        *self = DeleteFlow::Confirming(message);
    }

    /// Close without side effects.
    pub fn cancel(&mut self) {
        *self = DeleteFlow::Idle;
    }

    /// Emit the delete request for the selected message and close.
    ///
    /// Returns the request that was sent, or `None` when nothing was selected.
    /// A closed channel is logged; the dialog closes either way.
    pub fn confirm<C>(&mut self, channel: &C) -> Option<DeleteRequest>
    where
        C: RealtimeChannel + ?Sized,
    {
        let DeleteFlow::Confirming(message) = std::mem::take(self) else {
            return None;
        };

        let request = DeleteRequest::for_message(&message);
        if let Err(e) = channel.emit(ChannelEvent::DeleteMessage(request.clone())) {
            warn!(message_id = %request.message_id, error = %e, "Delete request not queued");
        }
        Some(request)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteFlow::Confirming(_))
    }

    pub fn selected(&self) -> Option<&Message> {
        match self {
            DeleteFlow::Confirming(message) => Some(message),
            DeleteFlow::Idle => None,
        }
    }
}

/// Sender summary shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePreview {
    pub initial: char,
    pub name: String,
    pub content: String,
}

impl DeletePreview {
    pub fn of(message: &Message) -> Self {
        let profile = message.sender.profile.as_ref();
        let first_initial = profile
            .and_then(|p| p.first_name.as_deref())
            .and_then(|n| n.chars().next());
        let email = profile.and_then(|p| p.email.as_deref());
        let initial = first_initial
            .or_else(|| email.and_then(|e| e.chars().next()).map(|c| c.to_ascii_uppercase()))
            .unwrap_or('?');

        let has_both_names = profile.is_some_and(|p| p.first_name.is_some() && p.last_name.is_some());
        let full_name = if has_both_names {
            message.sender.display_name()
        } else {
            None
        };
        let name = full_name
            .or_else(|| email.and_then(|e| e.split('@').next()).map(str::to_string))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            initial,
            name,
            content: preview_text(&message.content),
        }
    }
}

/// Truncate content for the dialog preview.
pub fn preview_text(content: &str) -> String {
    if content.is_empty() {
        return "Empty message".to_string();
    }
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}
