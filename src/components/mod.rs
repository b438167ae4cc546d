//! UI Components for Chatpane.

pub mod messages;
mod toast;

pub use toast::{show_toast, ToastHost, ToastQueue};
