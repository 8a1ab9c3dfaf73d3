//! In-process stub backend for client integration tests.
//!
//! Stands up a real `axum` server on an ephemeral port so the client
//! exercises its actual transport stack (URL building, headers, status and
//! body handling) instead of a mocked trait. The stub keeps rockets in a
//! `Mutex<Vec<_>>` and records the raw query string of every launch-sync
//! call so tests can assert on exactly what hit the wire.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use launchdeck_client::{ClientConfig, LaunchdeckApi};

/// Shared state behind the stub routes.
#[derive(Default)]
pub struct StubBackend {
    pub rockets: Mutex<Vec<Value>>,
    pub next_id: AtomicI64,
    /// Raw query string of each `POST /rocket-launches/sync` call
    /// (`None` when the request had no query string at all).
    pub sync_queries: Mutex<Vec<Option<String>>>,
}

impl StubBackend {
    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Build the stub router. Route shapes mirror the real backend's versioned
/// resource convention.
pub fn stub_router(state: Arc<StubBackend>) -> Router {
    Router::new()
        .route("/api/v1/rockets", get(list_rockets).post(create_rocket))
        .route(
            "/api/v1/rockets/{id}",
            get(get_rocket).put(update_rocket).delete(delete_rocket),
        )
        .route("/api/v1/rocket-launches/sync", post(sync_launches))
        .route("/api/v1/stats", get(get_stats))
        .route("/api/v1/plain/{id}", put(plain_ack))
        .with_state(state)
}

/// Spawn the stub backend and return an API handle pointing at it, plus the
/// state handle for assertions.
pub async fn spawn_backend() -> (LaunchdeckApi, Arc<StubBackend>) {
    let state = Arc::new(StubBackend::default());
    let app = stub_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });

    let api = LaunchdeckApi::new(&ClientConfig::new(format!("http://{addr}")));
    (api, state)
}

// ---- handlers ----

async fn list_rockets(State(state): State<Arc<StubBackend>>) -> Json<Value> {
    let rockets = state.rockets.lock().unwrap();
    Json(Value::Array(rockets.clone()))
}

async fn create_rocket(
    State(state): State<Arc<StubBackend>>,
    Json(mut body): Json<Value>,
) -> impl IntoResponse {
    let id = state.allocate_id();
    let object = body.as_object_mut().expect("rocket body must be an object");
    object.insert("id".to_string(), json!(id));
    object.insert("created_at".to_string(), json!("2026-08-01T00:00:00Z"));
    object.insert("updated_at".to_string(), json!("2026-08-01T00:00:00Z"));

    state.rockets.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn get_rocket(
    State(state): State<Arc<StubBackend>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let rockets = state.rockets.lock().unwrap();
    match rockets.iter().find(|r| r["id"] == json!(id)) {
        Some(rocket) => Json(rocket.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "rocket not found").into_response(),
    }
}

async fn update_rocket(
    State(state): State<Arc<StubBackend>>,
    Path(id): Path<i64>,
    Json(patch): Json<Value>,
) -> axum::response::Response {
    let mut rockets = state.rockets.lock().unwrap();
    let Some(rocket) = rockets.iter_mut().find(|r| r["id"] == json!(id)) else {
        return (StatusCode::NOT_FOUND, "rocket not found").into_response();
    };
    let target = rocket.as_object_mut().unwrap();
    for (key, value) in patch.as_object().cloned().unwrap_or_default() {
        target.insert(key, value);
    }
    Json(json!({ "message": "rocket updated" })).into_response()
}

async fn delete_rocket(
    State(state): State<Arc<StubBackend>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let mut rockets = state.rockets.lock().unwrap();
    let before = rockets.len();
    rockets.retain(|r| r["id"] != json!(id));
    if rockets.len() == before {
        (StatusCode::NOT_FOUND, "rocket not found").into_response()
    } else {
        // No body, no content type: the real backend answers 204 here.
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn sync_launches(
    State(state): State<Arc<StubBackend>>,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    let count = query
        .as_deref()
        .and_then(|q| q.strip_prefix("limit="))
        .and_then(|n| n.parse::<u64>().ok())
        .unwrap_or(25);
    state.sync_queries.lock().unwrap().push(query);
    Json(json!({ "message": "sync complete", "count": count }))
}

async fn get_stats() -> Json<Value> {
    Json(json!({
        "totalRockets": 12,
        "upcomingLaunches": 3,
        "newsArticles": 40,
        "launchBases": 7,
        "companies": 9,
    }))
}

/// 200 with a text/plain body -- exercises the non-JSON success path.
async fn plain_ack() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
