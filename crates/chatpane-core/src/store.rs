//! Shared chat state: who we are, which conversation is open, and its messages.
//!
//! The store is owned by the application shell. The message view only reads
//! it; history fetches and real-time events are the only writers.

use serde::{Deserialize, Serialize};

use crate::chat::{Message, MessageId, UserProfile};

/// Conversation flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// Two-party conversation
    #[serde(rename = "dm")]
    Direct,
    /// Multi-party channel
    Group,
}

impl ChatKind {
    pub fn is_group(self) -> bool {
        matches!(self, ChatKind::Group)
    }
}

/// The currently open conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSelection {
    /// Contact id for direct chats, channel id for groups
    pub id: String,
    pub kind: ChatKind,
    pub title: Option<String>,
}

impl ChatSelection {
    pub fn direct(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ChatKind::Direct,
            title: None,
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ChatKind::Group,
            title: None,
        }
    }

    /// Only direct conversations load history on selection.
    pub fn needs_history_fetch(&self) -> bool {
        self.kind == ChatKind::Direct
    }

    /// Whether a live message belongs to this conversation, as seen by `me`.
    ///
    /// Direct: a message between `me` and the contact, in either direction.
    /// Group: a message tagged with this channel's id.
    pub fn involves(&self, me: &str, message: &Message) -> bool {
        match self.kind {
            ChatKind::Direct => {
                let Some(recipient) = message.recipient.as_ref() else {
                    return false;
                };
                let (from, to) = (message.sender.id.as_str(), recipient.id.as_str());
                (from == me && to == self.id) || (from == self.id && to == me)
            }
            ChatKind::Group => message.channel_id.as_deref() == Some(self.id.as_str()),
        }
    }
}

/// Global chat store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatStore {
    pub user: Option<UserProfile>,
    pub selection: Option<ChatSelection>,
    /// `None` until the first history load for the selection
    pub messages: Option<Vec<Message>>,
}

impl ChatStore {
    pub fn new(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            selection: None,
            messages: None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn chat_kind(&self) -> Option<ChatKind> {
        self.selection.as_ref().map(|s| s.kind)
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.as_deref().unwrap_or(&[])
    }

    /// Switch conversation. Clears the list so the previous chat never
    /// flashes under the new header.
    pub fn select(&mut self, selection: ChatSelection) {
        if self.selection.as_ref() != Some(&selection) {
            self.selection = Some(selection);
            self.messages = None;
        }
    }

    /// Replace the list with a history load result. `None` leaves it untouched.
    pub fn apply_history(&mut self, chat: Option<Vec<Message>>) -> bool {
        match chat {
            Some(messages) => {
                self.messages = Some(messages);
                true
            }
            None => false,
        }
    }

    /// Append a live message if it belongs to the open conversation.
    pub fn push_message(&mut self, message: Message) -> bool {
        let me = self.user_id().unwrap_or_default();
        let belongs = self
            .selection
            .as_ref()
            .is_some_and(|s| s.involves(me, &message));
        if !belongs {
            return false;
        }
        let list = self.messages.get_or_insert_with(Vec::new);
        if list.iter().any(|m| m.id == message.id) {
            return false;
        }
        list.push(message);
        true
    }

    /// Drop a message removed on the server.
    pub fn remove_message(&mut self, id: &MessageId) -> bool {
        match self.messages.as_mut() {
            Some(list) => {
                let before = list.len();
                list.retain(|m| &m.id != id);
                list.len() != before
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::UserRef;
    use chrono::{TimeZone, Utc};

    fn me() -> UserProfile {
        UserProfile {
            id: "me".to_string(),
            first_name: Some("Me".to_string()),
            last_name: None,
            email: None,
        }
    }

    fn dm(id: &str, from: &str, to: &str) -> Message {
        Message {
            id: id.to_string(),
            sender: UserRef::id(from),
            recipient: Some(UserRef::id(to)),
            content: "hi".to_string(),
            kind: Default::default(),
            language: None,
            channel_id: None,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_apply_history_none_leaves_list() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::direct("bob"));
        assert!(!store.apply_history(None));
        assert!(store.messages.is_none());

        store.apply_history(Some(vec![dm("m1", "bob", "me")]));
        assert!(!store.apply_history(None));
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn test_select_same_conversation_keeps_messages() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::direct("bob"));
        store.apply_history(Some(vec![dm("m1", "bob", "me")]));

        store.select(ChatSelection::direct("bob"));
        assert_eq!(store.messages().len(), 1);

        store.select(ChatSelection::direct("carol"));
        assert!(store.messages.is_none());
    }

    #[test]
    fn test_push_message_routes_by_conversation() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::direct("bob"));

        assert!(store.push_message(dm("m1", "bob", "me")));
        assert!(store.push_message(dm("m2", "me", "bob")));
        assert!(!store.push_message(dm("m3", "carol", "me")));
        // duplicate delivery
        assert!(!store.push_message(dm("m1", "bob", "me")));
        assert_eq!(store.messages().len(), 2);
    }

    #[test]
    fn test_direct_chat_ignores_contact_group_posts() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::direct("bob"));

        let mut channel_post = dm("m1", "bob", "me");
        channel_post.recipient = None;
        channel_post.channel_id = Some("general".to_string());
        assert!(!store.push_message(channel_post));

        // bob writing to someone else is not our conversation
        assert!(!store.push_message(dm("m2", "bob", "carol")));
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_group_chat_routes_by_channel() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::group("general"));

        let post = |id: &str, channel: Option<&str>| {
            let mut msg = dm(id, "carol", "me");
            msg.recipient = None;
            msg.channel_id = channel.map(str::to_string);
            msg
        };

        assert!(store.push_message(post("m1", Some("general"))));
        assert!(!store.push_message(post("m2", Some("random"))));
        assert!(!store.push_message(post("m3", None)));
        assert!(!store.push_message(dm("m4", "carol", "me")));
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].id, "m1");
    }

    #[test]
    fn test_remove_message() {
        let mut store = ChatStore::new(me());
        store.select(ChatSelection::direct("bob"));
        store.apply_history(Some(vec![dm("m1", "bob", "me"), dm("m2", "me", "bob")]));

        assert!(store.remove_message(&"m1".to_string()));
        assert!(!store.remove_message(&"m1".to_string()));
        assert_eq!(store.messages()[0].id, "m2");
    }

    #[test]
    fn test_only_direct_needs_fetch() {
        assert!(ChatSelection::direct("a").needs_history_fetch());
        assert!(!ChatSelection::group("g").needs_history_fetch());
    }

    #[test]
    fn test_chat_kind_wire_names() {
        assert_eq!(serde_json::to_string(&ChatKind::Direct).unwrap(), "\"dm\"");
        assert_eq!(serde_json::to_string(&ChatKind::Group).unwrap(), "\"group\"");
    }
}
