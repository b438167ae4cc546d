use std::sync::Arc;

use chatpane_core::{ChannelEvent, ChatStore, ClickTarget, InteractionState, SocketChannel};
use dioxus::prelude::*;

use crate::components::messages::MessageContainer;
use crate::components::{ToastHost, ToastQueue};
use crate::context::SharedChannel;
use crate::launch_config;
use crate::theme::GLOBAL_STYLES;

/// Apply one inbound real-time event to the store.
fn apply_event(store: &mut ChatStore, event: ChannelEvent) {
    match event {
        ChannelEvent::ReceiveMessage(message) => {
            let id = message.id.clone();
            if store.push_message(message) {
                tracing::debug!(message_id = %id, "Appended live message");
            }
        }
        ChannelEvent::MessageDeleted(deleted) => {
            if store.remove_message(&deleted.message_id) {
                tracing::debug!(message_id = %deleted.message_id, "Removed deleted message");
            }
        }
        ChannelEvent::DeleteMessage(_) => {}
    }
}

/// A press that reached the shell landed outside every bubble and menu.
fn dismiss_outside(interaction: &mut InteractionState) {
    if interaction.outside_click(ClickTarget::Outside) {
        tracing::debug!("Dismissed message actions");
    }
}

/// Root application component.
///
/// Provides global styles, the chat store, the real-time channel, the toast
/// queue and the interaction state, then renders the message view. Any press
/// that bubbles up to the shell closes open action menus.
#[component]
pub fn App() -> Element {
    let Some(launch) = launch_config() else {
        return rsx! {
            p { class: "startup-error", "Chatpane was started without a configuration." }
        };
    };

    let mut store: Signal<ChatStore> = use_signal(|| {
        let mut store = ChatStore::new(launch.user.clone());
        if let Some(selection) = launch.selection.clone() {
            store.select(selection);
        }
        store
    });
    let toasts: Signal<ToastQueue> = use_signal(ToastQueue::default);
    let mut interaction: Signal<InteractionState> = use_signal(InteractionState::new);

    // Connect the real-time channel once; inbound events update the store
    let channel: SharedChannel = use_hook(|| {
        let (channel, worker) = SocketChannel::new(launch.chat.socket_url.clone());
        spawn(async move {
            let url = worker.url().to_string();
            let result = worker
                .run(move |event| {
                    apply_event(&mut store.write(), event);
                    true
                })
                .await;
            if let Err(e) = result {
                tracing::warn!(url = %url, error = %e, "Real-time channel unavailable");
            }
        });
        Arc::new(channel) as SharedChannel
    });

    use_context_provider(|| store);
    use_context_provider(|| toasts);
    use_context_provider(|| interaction);
    use_context_provider(|| channel);
    use_context_provider(|| launch.history.clone());
    use_context_provider(|| launch.chat.clone());

    let title = store
        .read()
        .selection
        .as_ref()
        .map(|s| s.title.clone().unwrap_or_else(|| s.id.clone()));

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-shell",
            onclick: move |_| dismiss_outside(&mut interaction.write()),
            ontouchstart: move |_| dismiss_outside(&mut interaction.write()),

            if let Some(title) = title {
                header { class: "chat-header",
                    h1 { class: "chat-title", "{title}" }
                }
            }
            MessageContainer {}
            ToastHost {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_core::channel::MessageDeleted;
    use chatpane_core::{ChatSelection, Message, UserProfile, UserRef};

    fn store() -> ChatStore {
        let mut store = ChatStore::new(UserProfile {
            id: "me".to_string(),
            first_name: None,
            last_name: None,
            email: None,
        });
        store.select(ChatSelection::direct("bob"));
        store
    }

    fn incoming(id: &str) -> Message {
        Message {
            id: id.to_string(),
            sender: UserRef::id("bob"),
            recipient: Some(UserRef::id("me")),
            content: "hey".to_string(),
            kind: Default::default(),
            language: None,
            channel_id: None,
            timestamp: chrono::Utc::now(),
        }
    }

    #[test]
    fn live_message_then_deletion() {
        let mut store = store();
        apply_event(&mut store, ChannelEvent::ReceiveMessage(incoming("m1")));
        assert_eq!(store.messages().len(), 1);

        apply_event(
            &mut store,
            ChannelEvent::MessageDeleted(MessageDeleted {
                message_id: "m1".to_string(),
            }),
        );
        assert!(store.messages().is_empty());
    }

    #[test]
    fn contact_channel_post_stays_out_of_direct_chat() {
        let mut store = store();
        let mut post = incoming("m2");
        post.recipient = None;
        post.channel_id = Some("general".to_string());
        apply_event(&mut store, ChannelEvent::ReceiveMessage(post));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn shell_press_closes_open_menu() {
        let mut interaction = InteractionState::new();
        interaction.click("m1", true);
        assert_eq!(interaction.open_menu_count(), 1);

        // e.g. a press on the header or a toast
        dismiss_outside(&mut interaction);
        assert_eq!(interaction.open_menu_count(), 0);
        assert_eq!(interaction.active(), None);
    }
}
