//! Message Bubble Component
//!
//! One row of the message list: optional date separator, then the bubble
//! aligned by authorship. Our own bubbles toggle an action menu on click;
//! every bubble copies on double click.

use chatpane_core::TimelineEntry;
use chatpane_ui::CopyIcon;
use dioxus::prelude::*;

use super::action_menu::ActionMenu;
use super::code_block::CodeBlock;

#[component]
pub fn MessageBubble(
    /// Display row built by the timeline
    entry: TimelineEntry,
    /// Whether this bubble's action menu is open
    menu_open: bool,
    /// Whether this message was just copied
    copied: bool,
    /// Single click on the bubble
    on_click: EventHandler<()>,
    /// Copy request (double click, menu button, code header button)
    on_copy: EventHandler<()>,
    /// Delete request from the action menu
    on_delete: EventHandler<()>,
) -> Element {
    let message = &entry.message;
    let show_menu = menu_open && entry.is_self;
    let bubble_class = if show_menu {
        format!("message-bubble {} bubble-focused", entry.bubble.class())
    } else {
        format!("message-bubble {}", entry.bubble.class())
    };

    rsx! {
        div { class: "message-group",
            if let Some(ref day) = entry.date_separator {
                div { class: "date-separator", "{day}" }
            }

            div { class: "message-row {entry.alignment.class()}",
                div {
                    class: "message-container",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_click.call(());
                    },
                    ondoubleclick: move |e| {
                        e.stop_propagation();
                        e.prevent_default();
                        on_copy.call(());
                    },
                    ontouchstart: move |e| e.stop_propagation(),

                    if show_menu {
                        ActionMenu {
                            copied: copied,
                            on_copy: move |_| on_copy.call(()),
                            on_delete: move |_| on_delete.call(()),
                        }
                    }

                    div { class: "{bubble_class}",
                        if let Some(ref name) = entry.sender_name {
                            div { class: "message-bubble-sender", "{name}" }
                        }

                        span { class: "copy-hint", CopyIcon { size: 10 } }

                        if message.is_code() {
                            CodeBlock {
                                content: message.content.clone(),
                                language: message.language.clone(),
                                label: message.language_label().to_string(),
                                copied: copied,
                                on_copy: move |_| on_copy.call(()),
                            }
                        } else {
                            p { class: "message-bubble-content", "{message.content}" }
                        }

                        span { class: "message-bubble-time", "{entry.time}" }
                    }
                }
            }
        }
    }
}
