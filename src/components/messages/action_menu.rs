//! Action Menu Component
//!
//! Floating copy/delete controls above one of our own bubbles. Clicks inside
//! the menu never reach the bubble or the outside-click handler.

use chatpane_ui::{Button, ButtonVariant, CheckIcon, CopyIcon, TrashIcon};
use dioxus::prelude::*;

#[component]
pub fn ActionMenu(
    /// Show the check mark instead of the copy icon
    copied: bool,
    /// Copy the message
    on_copy: EventHandler<()>,
    /// Open the delete confirmation
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "message-actions",
            onclick: move |e| e.stop_propagation(),
            ontouchstart: move |e| e.stop_propagation(),

            div { class: "message-actions-panel",
                Button {
                    variant: ButtonVariant::Action,
                    class: "action-copy".to_string(),
                    title: "Copy message".to_string(),
                    onclick: move |_| on_copy.call(()),
                    if copied {
                        CheckIcon { size: 18 }
                    } else {
                        CopyIcon { size: 18 }
                    }
                }
                Button {
                    variant: ButtonVariant::Action,
                    class: "action-delete".to_string(),
                    title: "Delete message".to_string(),
                    onclick: move |_| on_delete.call(()),
                    TrashIcon { size: 18 }
                }
            }

            div { class: "message-actions-arrow" }
        }
    }
}
