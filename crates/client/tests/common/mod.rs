#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Canned responses for the stub store.
#[derive(Clone)]
pub struct StubConfig {
    pub create_status: StatusCode,
    pub create_body: Value,
    pub feedback: Value,
    pub projects: Value,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            create_status: StatusCode::CREATED,
            create_body: json!({
                "success": true,
                "message": "Feedback submitted successfully.",
                "data": { "id": "0190a1b2-0000-7000-8000-000000000001" },
            }),
            feedback: json!([]),
            projects: json!([]),
        }
    }
}

#[derive(Clone)]
struct StubState {
    config: StubConfig,
    posted: Arc<Mutex<Vec<(String, Value)>>>,
    reads: Arc<AtomicUsize>,
}

/// Handle to a running stub store.
pub struct Stub {
    pub base_url: String,
    posted: Arc<Mutex<Vec<(String, Value)>>>,
    reads: Arc<AtomicUsize>,
}

impl Stub {
    /// Every create request received, as `(path, body)`.
    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().unwrap().clone()
    }

    pub fn post_count(&self) -> usize {
        self.posted.lock().unwrap().len()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

async fn create(State(state): State<StubState>, uri: Uri, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state
        .posted
        .lock()
        .unwrap()
        .push((uri.path().to_string(), body));
    (state.config.create_status, Json(state.config.create_body.clone()))
}

async fn list(State(state): State<StubState>, uri: Uri) -> Json<Value> {
    state.reads.fetch_add(1, Ordering::SeqCst);
    let body = if uri.path().ends_with("/projects") {
        state.config.projects.clone()
    } else {
        state.config.feedback.clone()
    };
    Json(body)
}

/// Serve a stub store on an ephemeral localhost port.
pub async fn spawn_stub(config: StubConfig) -> Stub {
    let state = StubState {
        config,
        posted: Arc::new(Mutex::new(Vec::new())),
        reads: Arc::new(AtomicUsize::new(0)),
    };
    let stub = Stub {
        base_url: String::new(),
        posted: Arc::clone(&state.posted),
        reads: Arc::clone(&state.reads),
    };

    let app = Router::new()
        .route("/api/feedback", get(list).post(create))
        .route("/api/projects", get(list).post(create))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Stub {
        base_url: format!("http://{addr}"),
        ..stub
    }
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// One stored feedback document as the store lists it.
pub fn feedback_doc(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "mobile": null,
        "email": null,
        "project_name": null,
        "feedback": "Great service",
        "rating": 5,
        "created_at": "2024-03-01T12:00:00Z",
    })
}

/// One stored project document as the store lists it.
pub fn project_doc(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "summary": "A short summary",
        "description": "A longer description of the work",
        "tags": ["rust"],
        "thumbnail": null,
        "media": [{ "type": "image", "src": "https://cdn.example.com/1.png" }],
        "created_at": "2024-03-01T12:00:00Z",
        "updated_at": "2024-03-01T12:00:00Z",
    })
}
