//! Modal Dialog Shell
//!
//! Overlay plus centered panel. Clicking the overlay requests close; clicks
//! inside the panel stay inside.

use dioxus::prelude::*;

use super::button::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Show/hide the dialog
    pub open: bool,
    /// Called when the overlay is clicked
    pub on_close: EventHandler<()>,
    /// Title line
    pub title: String,
    /// Muted line under the title
    #[props(default)]
    pub description: Option<String>,
    /// Element shown left of the title (icon badge)
    #[props(default)]
    pub icon: Option<Element>,
    /// Body content
    pub children: Element,
    /// Footer buttons
    pub footer: Element,
    /// Extra classes for the panel
    #[props(default)]
    pub class: Option<String>,
    /// Extra classes for the footer (layout)
    #[props(default)]
    pub footer_class: Option<String>,
}

#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let panel_class = join_classes("dialog-panel", props.class.as_deref());
    let footer_class = join_classes("dialog-footer", props.footer_class.as_deref());

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |e| {
                e.stop_propagation();
                props.on_close.call(());
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                header { class: "dialog-header",
                    if let Some(icon) = props.icon.clone() {
                        div { class: "dialog-icon", {icon} }
                    }
                    div {
                        h2 { class: "dialog-title", "{props.title}" }
                        if let Some(description) = props.description.clone() {
                            p { class: "dialog-description", "{description}" }
                        }
                    }
                }

                div { class: "dialog-body", {props.children} }

                footer { class: "{footer_class}", {props.footer} }
            }
        }
    }
}
