//! Per-message interaction state for the message list
//!
//! Tracks which bubble has its action menu open, which bubble is "active",
//! and which bubble was just copied. All state is local to one mounted view.
//!
//! # Gestures
//!
//! - single click on our own bubble toggles its menu and closes every other
//! - single click on someone else's bubble does nothing
//! - double click on any bubble copies its content and leaves menus alone
//! - a click anywhere outside bubbles and menus closes everything

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use super::message::MessageId;
use crate::clipboard::ClipboardWriter;
use crate::error::ChatResult;

/// How long the copied indicator stays lit after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Where a pointer press landed, as far as dismissal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside a message bubble
    Bubble,
    /// Inside an open action menu
    ActionMenu,
    /// Anywhere else in the window
    Outside,
}

/// Proof of a specific copy, used to clear the indicator later.
///
/// Only the ticket of the latest copy can clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket {
    generation: u64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InteractionState {
    menus: HashMap<MessageId, bool>,
    active: Option<MessageId>,
    copied: Option<MessageId>,
    copy_generation: u64,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single click on a bubble.
    ///
    /// Returns whether anything changed.
    pub fn click(&mut self, id: &str, is_self: bool) -> bool {
        if !is_self {
            return false;
        }

        let was_open = self.is_menu_open(id);
        for open in self.menus.values_mut() {
            *open = false;
        }
        self.menus.insert(id.to_string(), !was_open);
        self.active = Some(id.to_string());

        debug!(message_id = %id, open = !was_open, "Toggled action menu");
        true
    }

    /// Double click on a bubble: copy without touching the toggle.
    pub fn double_click<C>(&mut self, clipboard: &C, id: &str, content: &str) -> ChatResult<CopyTicket>
    where
        C: ClipboardWriter + ?Sized,
    {
        self.copy(clipboard, id, content)
    }

    /// Pointer press somewhere in the window.
    pub fn outside_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Bubble | ClickTarget::ActionMenu => false,
            ClickTarget::Outside => {
                let had_state = self.open_menu().is_some() || self.active.is_some();
                self.menus.clear();
                self.active = None;
                had_state
            }
        }
    }

    /// Copy `content` and light the copied indicator on `id`.
    ///
    /// On failure nothing changes; the caller surfaces the error.
    pub fn copy<C>(&mut self, clipboard: &C, id: &str, content: &str) -> ChatResult<CopyTicket>
    where
        C: ClipboardWriter + ?Sized,
    {
        if let Err(e) = clipboard.write_text(content) {
            warn!(message_id = %id, error = %e, "Clipboard write failed");
            return Err(e);
        }

        self.menus.clear();
        self.copied = Some(id.to_string());
        self.copy_generation += 1;

        debug!(message_id = %id, generation = self.copy_generation, "Copied message");
        Ok(CopyTicket {
            generation: self.copy_generation,
        })
    }

    /// Clear the indicator if `ticket` belongs to the most recent copy.
    pub fn clear_copied(&mut self, ticket: CopyTicket) -> bool {
        if ticket.generation == self.copy_generation && self.copied.is_some() {
            self.copied = None;
            true
        } else {
            false
        }
    }

    /// Close every menu (after a delete confirm, for instance).
    pub fn close_menus(&mut self) {
        self.menus.clear();
    }

    pub fn is_menu_open(&self, id: &str) -> bool {
        self.menus.get(id).copied().unwrap_or(false)
    }

    /// The message whose menu is open, if any.
    pub fn open_menu(&self) -> Option<&str> {
        self.menus
            .iter()
            .find(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }

    pub fn open_menu_count(&self) -> usize {
        self.menus.values().filter(|open| **open).count()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.as_deref() == Some(id)
    }

    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }
}
