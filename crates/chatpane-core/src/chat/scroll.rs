//! Auto-scroll marker
//!
//! The view scrolls its end anchor into view whenever the message list
//! changes and raises a short-lived `scrolling` flag while the smooth scroll
//! runs. Overlapping scrolls extend the flag: only the latest one lowers it.

use std::time::Duration;

/// How long the `scrolling` flag stays raised.
pub const SCROLL_FLAG: Duration = Duration::from_millis(1000);

/// Identifies one scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoScroll {
    scrolling: bool,
    generation: u64,
}

impl AutoScroll {
    /// Raise the flag for a new scroll.
    pub fn begin(&mut self) -> ScrollTicket {
        self.generation += 1;
        self.scrolling = true;
        ScrollTicket(self.generation)
    }

    /// Lower the flag if `ticket` is the latest scroll.
    pub fn finish(&mut self, ticket: ScrollTicket) -> bool {
        if ticket.0 == self.generation && self.scrolling {
            self.scrolling = false;
            true
        } else {
            false
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}
