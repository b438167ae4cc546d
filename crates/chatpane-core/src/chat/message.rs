//! Chat message types as delivered by the chat server
//!
//! The server sends the sender (and recipient) either as an embedded user
//! document or as a bare identifier depending on whether the query populated
//! it. [`UserRef`] normalizes both shapes at deserialization time so the rest
//! of the crate compares identifiers without branching on the shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Message identifier as assigned by the server.
pub type MessageId = String;

/// Public profile fields of a chat user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// "First Last", collapsing whichever half is missing.
    ///
    /// Returns `None` when neither name is set.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// A reference to a user: always an id, sometimes with the embedded profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUserRef", into = "RawUserRef")]
pub struct UserRef {
    pub id: String,
    pub profile: Option<UserProfile>,
}

/// Wire shape of a user reference.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawUserRef {
    Embedded(UserProfile),
    Id(String),
}

impl From<RawUserRef> for UserRef {
    fn from(raw: RawUserRef) -> Self {
        match raw {
            RawUserRef::Embedded(profile) => Self {
                id: profile.id.clone(),
                profile: Some(profile),
            },
            RawUserRef::Id(id) => Self { id, profile: None },
        }
    }
}

impl From<UserRef> for RawUserRef {
    fn from(user: UserRef) -> Self {
        match user.profile {
            Some(profile) => RawUserRef::Embedded(profile),
            None => RawUserRef::Id(user.id),
        }
    }
}

impl UserRef {
    /// Reference carrying only an identifier.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: None,
        }
    }

    /// Reference carrying the embedded profile.
    pub fn embedded(profile: UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            profile: Some(profile),
        }
    }

    /// Display name for group chats ("First Last"), if a profile is embedded.
    pub fn display_name(&self) -> Option<String> {
        self.profile.as_ref().and_then(UserProfile::full_name)
    }
}

/// Content discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
    Code,
}

impl MessageKind {
    /// Parse the server's `messageType`; anything unrecognized renders as text.
    pub fn parse(value: &str) -> Self {
        match value {
            "code" => MessageKind::Code,
            _ => MessageKind::Text,
        }
    }
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<MessageKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(MessageKind::parse).unwrap_or_default())
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub sender: UserRef,
    /// Present for direct messages, absent in group channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<UserRef>,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "messageType", default, deserialize_with = "lenient_kind")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Group channel the message was posted to; absent for direct messages.
    #[serde(rename = "channelId", default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(rename = "timeStamp")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Whether `user_id` authored this message.
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender.id == user_id
    }

    pub fn is_code(&self) -> bool {
        self.kind == MessageKind::Code
    }

    /// Label shown above a code block.
    pub fn language_label(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_as_embedded_object() {
        let json = r#"{
            "_id": "m1",
            "sender": {"_id": "u1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "recipient": "u2",
            "content": "hello",
            "messageType": "text",
            "timeStamp": "2024-01-01T10:00:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender.id, "u1");
        assert_eq!(msg.sender.display_name(), Some("Ada Lovelace".to_string()));
        assert_eq!(msg.recipient, Some(UserRef::id("u2")));
        assert!(msg.is_from("u1"));
        assert!(!msg.is_from("u2"));
    }

    #[test]
    fn test_sender_as_raw_id() {
        let json = r#"{
            "_id": "m1",
            "sender": "u1",
            "content": "hello",
            "timeStamp": "2024-01-01T10:00:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender, UserRef::id("u1"));
        assert!(msg.recipient.is_none());
        assert_eq!(msg.kind, MessageKind::Text);
        assert!(msg.is_from("u1"));
    }

    #[test]
    fn test_group_post_carries_channel_id() {
        let json = r#"{
            "_id": "m1",
            "sender": "u1",
            "channelId": "general",
            "content": "hello all",
            "timeStamp": "2024-01-01T10:00:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.channel_id.as_deref(), Some("general"));
        assert!(msg.recipient.is_none());
    }

    #[test]
    fn test_unknown_message_type_is_text() {
        let json = r#"{
            "_id": "m1",
            "sender": "u1",
            "messageType": "file",
            "timeStamp": "2024-01-01T10:00:00Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.content, "");
    }

    #[test]
    fn test_code_message_language_label() {
        let json = r#"{
            "_id": "m1",
            "sender": "u1",
            "content": "fn main() {}",
            "messageType": "code",
            "language": "rust",
            "timeStamp": "2024-01-01T10:00:00Z"
        }"#;
        let mut msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.is_code());
        assert_eq!(msg.language_label(), "rust");

        msg.language = None;
        assert_eq!(msg.language_label(), "code");
    }

    #[test]
    fn test_full_name_partial() {
        let profile = UserProfile {
            id: "u1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            email: None,
        };
        assert_eq!(profile.full_name(), Some("Ada".to_string()));

        let anonymous = UserProfile {
            id: "u2".to_string(),
            first_name: None,
            last_name: Some("  ".to_string()),
            email: None,
        };
        assert_eq!(anonymous.full_name(), None);
    }

    #[test]
    fn test_user_ref_serializes_back_to_wire_shape() {
        let raw = serde_json::to_value(UserRef::id("u1")).unwrap();
        assert_eq!(raw, serde_json::json!("u1"));
    }
}
