//! Delete Confirmation Dialog
//!
//! Shows who wrote the message, when, and a truncated preview, with
//! Cancel / Delete buttons. On mobile the buttons stack full-width.

use chatpane_core::{DeletePreview, DialogLayout, Message};
use chatpane_ui::{AlertTriangleIcon, Button, ButtonVariant, Dialog, TrashIcon};
use dioxus::prelude::*;

#[component]
pub fn DeleteDialog(
    /// Message awaiting confirmation; `None` hides the dialog
    message: Option<Message>,
    /// Footer layout for the current device
    layout: DialogLayout,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    let preview = DeletePreview::of(&message);
    let sent_at = message
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%d/%m/%Y, %H:%M:%S")
        .to_string();
    let stacked = layout == DialogLayout::Stacked;
    let panel_class = if stacked { "dialog-mobile" } else { "dialog-desktop" };

    rsx! {
        Dialog {
            open: true,
            on_close: move |_| on_cancel.call(()),
            title: "Delete Message".to_string(),
            description: "This action cannot be undone".to_string(),
            class: panel_class.to_string(),
            footer_class: layout.class().to_string(),
            icon: rsx! {
                span { class: "dialog-icon-danger", AlertTriangleIcon { size: 20 } }
            },
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    full_width: stacked,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    full_width: stacked,
                    onclick: move |_| on_confirm.call(()),
                    TrashIcon { size: 16 }
                    "Delete Message"
                }
            },

            div { class: "delete-preview",
                div { class: "delete-preview-sender",
                    div { class: "avatar-placeholder", "{preview.initial}" }
                    div { class: "delete-preview-meta",
                        div { class: "delete-preview-name", "{preview.name}" }
                        div { class: "delete-preview-time", "{sent_at}" }
                    }
                }
                div { class: "delete-preview-content",
                    p { "{preview.content}" }
                }
            }
        }
    }
}
