//! Message list logic
//!
//! Everything the message view does that is not drawing pixels lives here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  View (chatpane binary, Dioxus)                                 │
//! │  - MessageContainer: signals, effects, event wiring             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Chat layer (this module)                                       │
//! │  - Message / UserRef: normalized wire records                   │
//! │  - timeline: day separators, alignment, bubble style            │
//! │  - InteractionState: action menus, copy feedback                │
//! │  - DeleteFlow: confirm dialog, delete emission                  │
//! │  - AutoScroll: transient scrolling marker                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Transport (api, channel)                                       │
//! │  - HTTP history fetch, WebSocket event frames                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod delete;
mod interaction;
mod message;
mod scroll;
mod timeline;

pub use delete::{preview_text, DeleteFlow, DeletePreview, PREVIEW_CHARS};
pub use interaction::{ClickTarget, CopyTicket, InteractionState, COPY_FEEDBACK};
pub use message::{Message, MessageId, MessageKind, UserProfile, UserRef};
pub use scroll::{AutoScroll, ScrollTicket, SCROLL_FLAG};
pub use timeline::{
    build_timeline, format_day, format_time, Alignment, BubbleStyle, TimelineEntry, DAY_FORMAT,
    TIME_FORMAT,
};
