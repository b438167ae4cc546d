//! Chatpane Core Library
//!
//! State and transport for a chat message list: history loading, day
//! grouping, per-message copy/delete interactions and the real-time channel
//! used to request deletions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chatpane_core::{api, build_timeline, ChatConfig, ChatSelection, HttpHistoryClient};
//!
//! let config = ChatConfig::default();
//! let client = HttpHistoryClient::new(&config)?;
//! let selection = ChatSelection::direct("contact-id");
//!
//! if let Some(messages) = api::load_history(&client, &selection).await {
//!     for row in build_timeline(&messages, "my-id", selection.kind, &chrono::Local) {
//!         if let Some(day) = &row.date_separator {
//!             println!("--- {day} ---");
//!         }
//!         println!("[{}] {}", row.time, row.message.content);
//!     }
//! }
//! ```

pub mod api;
pub mod channel;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod highlight;
pub mod notify;
pub mod store;
pub mod viewport;

// Re-exports
pub use api::{HistoryClient, HttpHistoryClient};
pub use channel::{ChannelEvent, DeleteRequest, RealtimeChannel, SocketChannel, SocketWorker};
pub use chat::*;
pub use clipboard::ClipboardWriter;
pub use config::ChatConfig;
pub use error::{ChatError, ChatResult};
pub use highlight::{highlight_code, Highlighted};
pub use notify::{Toast, ToastKind};
pub use store::{ChatKind, ChatSelection, ChatStore};
pub use viewport::{DialogLayout, Viewport};
