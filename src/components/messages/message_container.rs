//! Message Container Component
//!
//! Scrollable list of the selected conversation. Loads direct-chat history
//! when the selection changes, keeps the newest message in view, and wires
//! bubble gestures to the interaction state and the delete dialog.
//!
//! Bubbles and action menus stop propagation; the app shell treats any press
//! that reaches it as an outside click and closes the menus.

use std::rc::Rc;

use chatpane_core::api::load_history;
use chatpane_core::{build_timeline, AutoScroll, DeleteFlow, Toast, Viewport};
use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

use super::delete_dialog::DeleteDialog;
use super::message_bubble::MessageBubble;
use crate::clipboard::DesktopClipboard;
use crate::components::show_toast;
use crate::context::{
    use_channel, use_chat_config, use_chat_store, use_history_client, use_interaction, use_toasts,
};

#[component]
pub fn MessageContainer() -> Element {
    let mut store = use_chat_store();
    let channel = use_channel();
    let history = use_history_client();
    let config = use_chat_config();
    let toasts = use_toasts();
    let mut interaction = use_interaction();

    let mut delete_flow = use_signal(DeleteFlow::default);
    let mut viewport = use_signal(|| Viewport::new(config.touch_capable, config.mobile_breakpoint));
    let mut auto_scroll = use_signal(AutoScroll::default);
    let mut end_anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Narrow views of the store so effects only rerun on what they depend on
    let selection = use_memo(move || store.read().selection.clone());
    let messages = use_memo(move || store.read().messages().to_vec());
    let user_id = use_memo(move || store.read().user_id().unwrap_or_default().to_string());

    let copy_feedback = config.copy_feedback();
    let scroll_flag = config.scroll_flag();

    // Load history whenever a direct conversation is selected
    use_effect(move || {
        let Some(selected) = selection() else {
            return;
        };
        let history = history.clone();
        spawn(async move {
            let loaded = load_history(&history, &selected).await;
            let mut store = store.write();
            if store.selection.as_ref() == Some(&selected) {
                store.apply_history(loaded);
            }
        });
    });

    // Pin the view to the newest message on every list change
    use_effect(move || {
        let count = messages.read().len();
        let ticket = auto_scroll.write().begin();
        spawn(async move {
            let anchor = end_anchor.peek().clone();
            if let Some(anchor) = anchor {
                if let Err(e) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(error = ?e, count, "Scroll to end failed");
                }
            }
            tokio::time::sleep(scroll_flag).await;
            auto_scroll.write().finish(ticket);
        });
    });

    let mut copy_message = move |id: String, content: String| {
        let result = interaction.write().copy(&DesktopClipboard, &id, &content);
        match result {
            Ok(ticket) => {
                show_toast(toasts, Toast::copied());
                spawn(async move {
                    tokio::time::sleep(copy_feedback).await;
                    interaction.write().clear_copied(ticket);
                });
            }
            Err(_) => show_toast(toasts, Toast::copy_failed()),
        }
    };

    let confirm_delete = move |_: ()| {
        if let Some(request) = delete_flow.write().confirm(channel.as_ref()) {
            tracing::info!(message_id = %request.message_id, "Requested message deletion");
            interaction.write().close_menus();
            show_toast(toasts, Toast::deleted());
        }
    };

    let kind = selection().map(|s| s.kind);
    let rows = match kind {
        Some(kind) => build_timeline(&messages.read(), &user_id.read(), kind, &chrono::Local),
        None => Vec::new(),
    };
    let state = interaction.read().clone();

    let bubbles = rows.into_iter().map(|entry| {
        let id = entry.message.id.clone();
        let is_self = entry.is_self;
        let menu_open = state.is_menu_open(&id);
        let copied = state.is_copied(&id);
        let click_id = id.clone();
        let copy_id = id.clone();
        let content = entry.message.content.clone();
        let target = entry.message.clone();

        rsx! {
            MessageBubble {
                key: "{id}",
                entry,
                menu_open,
                copied,
                on_click: move |_| {
                    interaction.write().click(&click_id, is_self);
                },
                on_copy: move |_| copy_message(copy_id.clone(), content.clone()),
                on_delete: move |_| delete_flow.write().open(target.clone()),
            }
        }
    });

    rsx! {
        div {
            class: "message-view",
            onresize: move |e: ResizeEvent| {
                if let Ok(size) = e.get_content_box_size() {
                    if viewport.write().resize(size.width) {
                        tracing::debug!(width = size.width, mobile = viewport.peek().is_mobile(), "Viewport class changed");
                    }
                }
            },

            div {
                class: if auto_scroll.read().is_scrolling() { "message-scroll scrolling" } else { "message-scroll" },
                div { class: "message-column",
                    {bubbles}
                    div {
                        class: "scroll-anchor",
                        onmounted: move |e: MountedEvent| end_anchor.set(Some(e.data())),
                    }
                }
            }

            DeleteDialog {
                message: delete_flow.read().selected().cloned(),
                layout: viewport.read().dialog_layout(),
                on_cancel: move |_| delete_flow.write().cancel(),
                on_confirm: confirm_delete,
            }
        }
    }
}
