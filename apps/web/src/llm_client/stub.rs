//! Local stand-in for the Messages endpoint. Replies are served in order;
//! once they run out every request gets a 500.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

#[derive(Clone, Default)]
pub struct StubMessages {
    replies: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
    hits: Arc<AtomicUsize>,
}

impl StubMessages {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// A successful Messages body with one text block.
pub fn text_reply(text: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 12, "output_tokens": 8}
        }),
    )
}

pub fn error_reply(status: StatusCode, message: &str) -> (StatusCode, Value) {
    (
        status,
        json!({"type": "error", "error": {"type": "api_error", "message": message}}),
    )
}

async fn reply(State(stub): State<StubMessages>) -> (StatusCode, Json<Value>) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    let next = stub.replies.lock().unwrap().pop_front();
    let (status, body) =
        next.unwrap_or_else(|| error_reply(StatusCode::INTERNAL_SERVER_ERROR, "no reply queued"));
    (status, Json(body))
}

/// Binds an ephemeral port and returns the endpoint URL plus a handle for
/// counting requests.
pub async fn spawn(replies: Vec<(StatusCode, Value)>) -> (String, StubMessages) {
    let stub = StubMessages {
        replies: Arc::new(Mutex::new(replies.into())),
        hits: Arc::default(),
    };

    let app = Router::new()
        .route("/v1/messages", post(reply))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1/messages"), stub)
}
