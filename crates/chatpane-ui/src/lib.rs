//! Chatpane UI Components
//!
//! Dioxus primitives shared by the chat views: buttons, the modal dialog
//! shell and the small line icons used on message bubbles.
//!
//! Components only emit class names; the desktop shell ships the stylesheet.

pub mod components;

pub use components::*;
