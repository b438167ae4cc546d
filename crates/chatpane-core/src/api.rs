//! Message history over HTTP
//!
//! `POST {api_base}/api/message/get-messages` with `{"id": <contact id>}`
//! returns `{"chat": [...]}`. The `chat` key may be missing, in which case the
//! caller keeps whatever list it already shows.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chat::Message;
use crate::config::ChatConfig;
use crate::error::{ChatError, ChatResult};
use crate::store::ChatSelection;

/// Path of the history endpoint, relative to the API base.
pub const GET_MESSAGES_PATH: &str = "/api/message/get-messages";

#[derive(Debug, Serialize)]
struct HistoryRequest<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    chat: Option<Vec<Message>>,
}

/// Source of conversation history.
pub trait HistoryClient {
    /// Fetch the full history of a direct conversation.
    ///
    /// `Ok(None)` means the server answered without chat data.
    fn fetch_history(
        &self,
        conversation_id: &str,
    ) -> impl Future<Output = ChatResult<Option<Vec<Message>>>> + Send;
}

/// reqwest-backed history client.
#[derive(Debug, Clone)]
pub struct HttpHistoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpHistoryClient {
    pub fn new(config: &ChatConfig) -> ChatResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.session_token.as_deref() {
            let value = HeaderValue::from_str(&format!("jwt={token}"))
                .map_err(|e| ChatError::InvalidConfig(format!("session token: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl HistoryClient for HttpHistoryClient {
    fn fetch_history(
        &self,
        conversation_id: &str,
    ) -> impl Future<Output = ChatResult<Option<Vec<Message>>>> + Send {
        let request = self
            .http
            .post(self.url(GET_MESSAGES_PATH))
            .json(&HistoryRequest {
                id: conversation_id,
            });

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ChatError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let bytes = response.bytes().await?;
            let parsed: HistoryResponse = serde_json::from_slice(&bytes)?;
            Ok(parsed.chat)
        }
    }
}

/// Load history for `selection` if it is a direct conversation.
///
/// Failures are logged and swallowed: the caller keeps its current list.
pub async fn load_history<C>(client: &C, selection: &ChatSelection) -> Option<Vec<Message>>
where
    C: HistoryClient + ?Sized,
{
    if !selection.needs_history_fetch() {
        return None;
    }

    match client.fetch_history(&selection.id).await {
        Ok(Some(messages)) => {
            debug!(conversation = %selection.id, count = messages.len(), "Loaded history");
            Some(messages)
        }
        Ok(None) => {
            debug!(conversation = %selection.id, "History response carried no chat");
            None
        }
        Err(e) => {
            warn!(conversation = %selection.id, error = %e, "Failed to load history");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ChatConfig {
            api_base: "http://localhost:8747/".to_string(),
            ..Default::default()
        };
        let client = HttpHistoryClient::new(&config).unwrap();
        assert_eq!(
            client.url(GET_MESSAGES_PATH),
            "http://localhost:8747/api/message/get-messages"
        );
    }

    #[test]
    fn test_bad_session_token_rejected() {
        let config = ChatConfig {
            session_token: Some("bad\ntoken".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            HttpHistoryClient::new(&config),
            Err(ChatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_response_without_chat() {
        let parsed: HistoryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.chat.is_none());
    }
}
