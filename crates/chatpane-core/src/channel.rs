//! Real-time channel to the chat server
//!
//! Events travel as JSON text frames of the form
//! `{"event": "<name>", "data": {...}}` over a WebSocket. Outbound events are
//! queued on an unbounded channel so [`RealtimeChannel::emit`] never blocks the
//! UI thread; a [`SocketWorker`] owns the socket and hands inbound events to
//! a callback.
//!
//! Delivery is fire-and-forget. There is no acknowledgment and no reconnect:
//! when the socket drops, the task logs and exits.

use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info, warn};

use crate::chat::{Message, MessageId};
use crate::error::{ChatError, ChatResult};

/// Payload of an outbound `deleteMessage` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub message_id: MessageId,
    pub sender: String,
    pub recipient: Option<String>,
}

impl DeleteRequest {
    pub fn for_message(message: &Message) -> Self {
        Self {
            message_id: message.id.clone(),
            sender: message.sender.id.clone(),
            recipient: message.recipient.as_ref().map(|r| r.id.clone()),
        }
    }
}

/// Payload of an inbound `messageDeleted` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDeleted {
    pub message_id: MessageId,
}

/// Every event the client sends or understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ChannelEvent {
    #[serde(rename = "deleteMessage")]
    DeleteMessage(DeleteRequest),
    #[serde(rename = "receiveMessage")]
    ReceiveMessage(Message),
    #[serde(rename = "messageDeleted")]
    MessageDeleted(MessageDeleted),
}

impl ChannelEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChannelEvent::DeleteMessage(_) => "deleteMessage",
            ChannelEvent::ReceiveMessage(_) => "receiveMessage",
            ChannelEvent::MessageDeleted(_) => "messageDeleted",
        }
    }
}

/// Encode an event as a text frame.
pub fn encode_frame(event: &ChannelEvent) -> ChatResult<String> {
    Ok(serde_json::to_string(event)?)
}

/// Decode a text frame.
pub fn decode_frame(text: &str) -> ChatResult<ChannelEvent> {
    Ok(serde_json::from_str(text)?)
}

/// Outbound half of the real-time connection.
pub trait RealtimeChannel: Send + Sync {
    /// Queue an event for delivery. Does not wait for the server.
    fn emit(&self, event: ChannelEvent) -> ChatResult<()>;
}

/// WebSocket-backed channel.
#[derive(Debug, Clone)]
pub struct SocketChannel {
    outbound: mpsc::UnboundedSender<ChannelEvent>,
}

/// Owns the socket; drive it with [`SocketWorker::run`].
#[derive(Debug)]
pub struct SocketWorker {
    url: String,
    outbound: mpsc::UnboundedReceiver<ChannelEvent>,
}

impl SocketChannel {
    /// Create the channel handle and the worker that will own the socket.
    ///
    /// Events emitted before the worker connects are queued.
    pub fn new(url: impl Into<String>) -> (Self, SocketWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self { outbound: tx },
            SocketWorker {
                url: url.into(),
                outbound: rx,
            },
        )
    }
}

impl RealtimeChannel for SocketChannel {
    fn emit(&self, event: ChannelEvent) -> ChatResult<()> {
        debug!(event = event.name(), "Emitting real-time event");
        self.outbound
            .send(event)
            .map_err(|_| ChatError::Channel("socket task is not running".to_string()))
    }
}

impl SocketWorker {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connect, then pump frames until either side closes.
    ///
    /// `on_event` receives every decoded inbound event; returning `false`
    /// stops the worker.
    pub async fn run<F>(self, mut on_event: F) -> ChatResult<()>
    where
        F: FnMut(ChannelEvent) -> bool,
    {
        let SocketWorker { url, mut outbound } = self;

        let (stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| ChatError::WebSocket(Box::new(e)))?;
        info!(url = %url, "Real-time channel connected");

        let (mut sink, mut source) = stream.split();

        loop {
            tokio::select! {
                Some(event) = outbound.recv() => {
                    let text = match encode_frame(&event) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(event = event.name(), error = %e, "Dropping unencodable event");
                            continue;
                        }
                    };
                    sink.send(WsMessage::Text(text.into()))
                        .await
                        .map_err(|e| ChatError::WebSocket(Box::new(e)))?;
                }
                frame = source.next() => match frame {
                    Some(Ok(WsMessage::Text(text))) => match decode_frame(&text) {
                        Ok(event) => {
                            if !on_event(event) {
                                debug!("Inbound consumer gone, closing channel");
                                break;
                            }
                        }
                        Err(e) => debug!(error = %e, "Ignoring unknown frame"),
                    },
                    Some(Ok(WsMessage::Close(_))) | None => {
                        info!("Real-time channel closed by server");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(ChatError::WebSocket(Box::new(e))),
                },
            }
        }

        Ok(())
    }
}
