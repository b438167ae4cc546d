//! History loading against a local stub of the chat API

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chatpane_core::api::{load_history, GET_MESSAGES_PATH};
use chatpane_core::{ChatConfig, ChatError, ChatSelection, ChatStore, HistoryClient, HttpHistoryClient};
use parking_lot::Mutex;
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Stub {
    requests: Arc<Mutex<Vec<(Value, Option<String>)>>>,
}

async fn get_messages(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let cookie = headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.requests.lock().push((body.clone(), cookie));

    match body["id"].as_str() {
        Some("bob") => (
            StatusCode::OK,
            Json(json!({
                "chat": [
                    {"_id": "m1", "sender": {"_id": "me", "firstName": "Grace"}, "recipient": "bob",
                     "content": "hi", "messageType": "text", "timeStamp": "2024-01-01T09:00:00Z"},
                    {"_id": "m2", "sender": "bob", "recipient": {"_id": "me"},
                     "content": "print(1)", "messageType": "code", "language": "python",
                     "timeStamp": "2024-01-01T09:01:00Z"}
                ]
            })),
        ),
        Some("ghost") => (StatusCode::OK, Json(json!({}))),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))),
    }
}

async fn spawn_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route(GET_MESSAGES_PATH, post(get_messages))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

fn client_for(base: &str, token: Option<&str>) -> HttpHistoryClient {
    let config = ChatConfig {
        api_base: base.to_string(),
        session_token: token.map(str::to_string),
        ..Default::default()
    };
    HttpHistoryClient::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_direct_history() {
    let (base, stub) = spawn_stub().await;
    let client = client_for(&base, Some("abc"));

    let chat = client.fetch_history("bob").await.unwrap().unwrap();
    assert_eq!(chat.len(), 2);
    assert_eq!(chat[0].sender.id, "me");
    assert_eq!(chat[1].sender.id, "bob");
    assert!(chat[1].is_code());

    let requests = stub.requests.lock();
    assert_eq!(requests[0].0, json!({"id": "bob"}));
    assert_eq!(requests[0].1.as_deref(), Some("jwt=abc"));
}

#[tokio::test]
async fn empty_response_leaves_list_unchanged() {
    let (base, _stub) = spawn_stub().await;
    let client = client_for(&base, None);

    let mut store = ChatStore::default();
    store.select(ChatSelection::direct("ghost"));
    let selection = store.selection.clone().unwrap();

    let result = load_history(&client, &selection).await;
    assert!(result.is_none());
    assert!(!store.apply_history(result));
    assert!(store.messages.is_none());
}

#[tokio::test]
async fn server_error_is_swallowed() {
    let (base, _stub) = spawn_stub().await;
    let client = client_for(&base, None);

    let raw = client.fetch_history("nobody").await;
    assert!(matches!(raw, Err(ChatError::Status { status: 500, .. })));

    let selection = ChatSelection::direct("nobody");
    assert!(load_history(&client, &selection).await.is_none());
}

#[tokio::test]
async fn group_selection_does_not_fetch() {
    let (base, stub) = spawn_stub().await;
    let client = client_for(&base, None);

    assert!(load_history(&client, &ChatSelection::group("bob")).await.is_none());
    assert!(stub.requests.lock().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_swallowed() {
    // nothing listens on port 9 locally
    let client = client_for("http://127.0.0.1:9", None);
    assert!(load_history(&client, &ChatSelection::direct("bob")).await.is_none());
}
