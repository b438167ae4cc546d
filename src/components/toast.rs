//! Toast Notifications
//!
//! Transient success/error messages stacked at the bottom of the window.
//! Each toast removes itself when its duration elapses.

use chatpane_core::Toast;
use dioxus::prelude::*;

use crate::context::use_toasts;

/// Toasts currently on screen, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<(u64, Toast)>,
}

impl ToastQueue {
    /// Add a toast and return its handle.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        self.items.push((self.next_id, toast));
        self.next_id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(item, _)| *item != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[(u64, Toast)] {
        &self.items
    }
}

/// Show `toast` and schedule its removal.
pub fn show_toast(mut toasts: Signal<ToastQueue>, toast: Toast) {
    let duration = toast.duration;
    let id = toasts.write().push(toast);
    spawn(async move {
        tokio::time::sleep(duration).await;
        toasts.write().remove(id);
    });
}

/// Renders the toast stack.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-stack",
            for (id, toast) in items {
                div {
                    key: "{id}",
                    class: "toast {toast.kind.class()}",
                    role: "status",
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_remove() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::copied());
        let b = queue.push(Toast::deleted());
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        assert!(queue.remove(a));
        assert!(!queue.remove(a));
        assert_eq!(queue.items()[0].1, Toast::deleted());
    }
}
