//! Real-time channel against a local WebSocket server

use std::time::Duration;

use chatpane_core::channel::{ChannelEvent, DeleteRequest, MessageDeleted};
use chatpane_core::{RealtimeChannel, SocketChannel};
use tokio::sync::mpsc;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

/// Accept one client, report its first text frame, then push `reply`.
async fn spawn_server(reply: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(tcp).await.unwrap();

        while let Some(Ok(frame)) = ws.next().await {
            if let WsMessage::Text(text) = frame {
                let _ = tx.send(text.to_string());
                break;
            }
        }

        ws.send(WsMessage::Text(reply.into())).await.unwrap();
        // keep the socket open until the client reads the reply
        tokio::time::sleep(Duration::from_millis(200)).await;
    });

    (format!("ws://{addr}"), rx)
}

/// Run the worker on the test runtime, forwarding inbound events.
fn start_channel(url: &str) -> (SocketChannel, mpsc::UnboundedReceiver<ChannelEvent>) {
    let (channel, worker) = SocketChannel::new(url);
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let _ = worker.run(move |event| tx.send(event).is_ok()).await;
    });
    (channel, rx)
}

#[tokio::test]
async fn emits_delete_and_receives_deletion() {
    let (url, first_frame) =
        spawn_server(r#"{"event":"messageDeleted","data":{"messageId":"m1"}}"#).await;
    let (channel, mut inbound) = start_channel(&url);

    channel
        .emit(ChannelEvent::DeleteMessage(DeleteRequest {
            message_id: "m1".to_string(),
            sender: "me".to_string(),
            recipient: Some("bob".to_string()),
        }))
        .unwrap();

    let frame = tokio::time::timeout(Duration::from_secs(5), first_frame)
        .await
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(value["event"], "deleteMessage");
    assert_eq!(value["data"]["messageId"], "m1");
    assert_eq!(value["data"]["sender"], "me");
    assert_eq!(value["data"]["recipient"], "bob");

    let event = tokio::time::timeout(Duration::from_secs(5), inbound.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        event,
        ChannelEvent::MessageDeleted(MessageDeleted {
            message_id: "m1".to_string()
        })
    );
}

#[tokio::test]
async fn emit_after_failed_connect_reports_closed_channel() {
    let (channel, mut inbound) = start_channel("ws://127.0.0.1:9");

    // the socket task exits after the refused connect
    assert!(inbound.recv().await.is_none());

    let result = channel.emit(ChannelEvent::MessageDeleted(MessageDeleted {
        message_id: "m1".to_string(),
    }));
    assert!(result.is_err());
}
