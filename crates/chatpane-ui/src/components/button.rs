//! Button Components
//!
//! Button styles used by the chat views:
//! - Outline: neutral secondary action (Cancel)
//! - Danger: destructive action (Delete)
//! - Ghost: borderless inline action (Copy in code headers)
//! - Action: square icon button inside a message action menu

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Neutral bordered button
    #[default]
    Outline,
    /// Red destructive button
    Danger,
    /// Borderless, text-only
    Ghost,
    /// Square icon button for action menus
    Action,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Action => "btn-action",
        }
    }
}

/// Join a base class with optional extras.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler. The click never bubbles past the button.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    /// Tooltip
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         full_width: is_mobile,
///         onclick: move |_| confirm_delete(),
///         TrashIcon { size: 16 }
///         "Delete Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut class = join_classes(props.variant.class(), props.class.as_deref());
    if props.full_width {
        class.push_str(" btn-full");
    }

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: props.title.clone().unwrap_or_default(),
            onclick: move |e| {
                e.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Action.class(), "btn-action");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Outline);
    }

    #[test]
    fn join_classes_skips_blank_extras() {
        assert_eq!(join_classes("btn-ghost", None), "btn-ghost");
        assert_eq!(join_classes("btn-ghost", Some("  ")), "btn-ghost");
        assert_eq!(join_classes("btn-ghost", Some("copy")), "btn-ghost copy");
    }
}
