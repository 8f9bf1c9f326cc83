//! Mock multimodal model service for integration tests
//!
//! Speaks the OpenAI-compatible chat-completions wire format and serves a
//! couple of static images for the image proxy.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Bytes served as `/images/cover.png`
pub const COVER_PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

/// How the mock answers chat completions
#[derive(Debug, Clone)]
pub enum Reply {
    /// A single choice with this text
    Content(String),
    /// A single choice with empty content
    Empty,
    /// An `error` payload with the given status
    Error { status: StatusCode, message: String },
}

/// Mock upstream that records every completion request
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    reply: Reply,
    completion_count: AtomicU32,
    requests: Mutex<Vec<Value>>,
}

impl MockUpstream {
    /// Start a mock answering every completion with `content`
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start(Reply::Content(content.to_owned())).await
    }

    /// Start a mock rejecting every completion with an error payload
    pub async fn start_failing(status: StatusCode, message: &str) -> anyhow::Result<Self> {
        Self::start(Reply::Error {
            status,
            message: message.to_owned(),
        })
        .await
    }

    /// Start a mock with a scripted reply
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            completion_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/images/cover.png", routing::get(handle_cover))
            .route("/images/untyped", routing::get(handle_untyped))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for the upstream configuration
    ///
    /// Includes `/v1` since the client appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// URL of a path on the mock
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent completion request
    pub fn last_request(&self) -> Value {
        self.state
            .requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one completion request")
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// A base URL on which nothing listens
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}

async fn handle_chat_completions(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    let model = body["model"].as_str().unwrap_or_default().to_owned();
    state.requests.lock().unwrap().push(body);

    match &state.reply {
        Reply::Content(content) => Json(completion(&model, content)).into_response(),
        Reply::Empty => Json(completion(&model, "")).into_response(),
        Reply::Error { status, message } => (
            *status,
            Json(json!({
                "error": {
                    "message": message,
                    "type": "invalid_request_error",
                    "code": "mock_error"
                }
            })),
        )
            .into_response(),
    }
}

fn completion(model: &str, content: &str) -> Value {
    json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

async fn handle_cover() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], COVER_PNG)
}

/// Image without a `Content-Type` header
async fn handle_untyped() -> Response {
    Response::new(axum::body::Body::from(COVER_PNG))
}
