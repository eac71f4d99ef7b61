//! Fake portfolio site for transport tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `POST /contact`: configurable reply, JSON or HTML
//! - `POST /newsletter`: configurable reply
//! - `GET /api/testimonials`: configurable list or status
//!
//! Every POST body is recorded so tests can assert on what was sent.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned reply.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Html(StatusCode, &'static str),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Json(StatusCode::OK, body)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(code, body) => (code, Json(body)).into_response(),
            Reply::Html(code, body) => (code, Html(body)).into_response(),
        }
    }
}

struct SiteState {
    contact: Reply,
    newsletter: Reply,
    testimonials: Reply,
    received: Vec<(&'static str, Value)>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            contact: Reply::ok(json!({ "success": true })),
            newsletter: Reply::ok(json!({
                "success": true,
                "message": "Thank you for subscribing!"
            })),
            testimonials: Reply::ok(json!([])),
            received: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<SiteState>>;

/// Handle to the running fake site.
pub struct FakeSite {
    addr: SocketAddr,
    state: Shared,
}

impl FakeSite {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::new(Mutex::new(SiteState::default()));

        let app = Router::new()
            .route("/contact", post(contact))
            .route("/newsletter", post(newsletter))
            .route("/api/testimonials", get(testimonials))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Origin of the server (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn reply_contact(&self, reply: Reply) {
        self.state.lock().await.contact = reply;
    }

    pub async fn reply_newsletter(&self, reply: Reply) {
        self.state.lock().await.newsletter = reply;
    }

    pub async fn reply_testimonials(&self, reply: Reply) {
        self.state.lock().await.testimonials = reply;
    }

    /// `(path, body)` of every POST received so far.
    pub async fn received(&self) -> Vec<(&'static str, Value)> {
        self.state.lock().await.received.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn contact(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock().await;
    state.received.push(("/contact", body));
    state.contact.clone()
}

async fn newsletter(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut state = state.lock().await;
    state.received.push(("/newsletter", body));
    state.newsletter.clone()
}

async fn testimonials(State(state): State<Shared>) -> Reply {
    state.lock().await.testimonials.clone()
}
