//! Code Block Component
//!
//! Monospace block with a language label, a copy button and syntax
//! highlighting. Unknown languages still render, highlighted as JavaScript
//! or as plain text.

use chatpane_core::{highlight_code, Highlighted};
use chatpane_ui::{Button, ButtonVariant, CheckIcon, CopyIcon};
use dioxus::prelude::*;

#[component]
pub fn CodeBlock(
    /// Source text
    content: String,
    /// Language tag from the message
    language: Option<String>,
    /// Label above the block
    label: String,
    /// Copied indicator
    copied: bool,
    /// Copy handler
    on_copy: EventHandler<()>,
) -> Element {
    let highlighted = highlight_code(&content, language.as_deref());

    rsx! {
        div { class: "code-message",
            div { class: "code-header",
                span { class: "code-language", "{label}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "code-copy".to_string(),
                    onclick: move |_| on_copy.call(()),
                    if copied {
                        CheckIcon { size: 12 }
                        "Copied!"
                    } else {
                        CopyIcon { size: 12 }
                        "Copy"
                    }
                }
            }
            {match highlighted {
                Highlighted::Html(html) => rsx! {
                    div { class: "code-body", dangerous_inner_html: "{html}" }
                },
                Highlighted::Plain(text) => rsx! {
                    pre { class: "code-body",
                        code { "{text}" }
                    }
                },
            }}
        }
    }
}
