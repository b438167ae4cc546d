//! Context providers for the chat view.
//!
//! The root [`App`](crate::app::App) provides the store, the real-time
//! channel, the history client, the configuration, the toast queue and the
//! per-message interaction state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = use_chat_store();
//! let channel = use_channel();
//! channel.emit(event)?;
//! ```

use std::sync::Arc;

use chatpane_core::{ChatConfig, ChatStore, HttpHistoryClient, InteractionState, RealtimeChannel};
use dioxus::prelude::*;

use crate::components::ToastQueue;

/// Shared real-time channel type for context.
pub type SharedChannel = Arc<dyn RealtimeChannel>;

/// Hook to access the chat store.
pub fn use_chat_store() -> Signal<ChatStore> {
    use_context::<Signal<ChatStore>>()
}

/// Hook to access the real-time channel.
pub fn use_channel() -> SharedChannel {
    use_context::<SharedChannel>()
}

/// Hook to access the message history client.
pub fn use_history_client() -> HttpHistoryClient {
    use_context::<HttpHistoryClient>()
}

/// Hook to access the client configuration.
pub fn use_chat_config() -> ChatConfig {
    use_context::<ChatConfig>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Hook to access menu and copied-indicator state.
///
/// Lives at the app root so clicks anywhere in the window can dismiss menus.
pub fn use_interaction() -> Signal<InteractionState> {
    use_context::<Signal<InteractionState>>()
}
