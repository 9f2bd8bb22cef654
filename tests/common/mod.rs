#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use vectrix_api::{app::env::Envy, AppState};

pub const TOKEN: &str = "r8_test_token";

/// How the fake upstream answers prediction requests.
#[derive(Clone, Copy, Debug)]
pub enum Upstream {
    Succeed,
    Reject,
    Fail,
    Poll,
    Empty,
}

#[derive(Clone)]
struct MockState {
    mode: Upstream,
    base_url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

#[derive(Clone, Debug)]
pub struct Received {
    pub path: String,
    pub authorization: Option<String>,
    pub prefer: Option<String>,
    pub body: Option<Value>,
}

pub struct MockUpstream {
    pub base_url: String,
    pub api_url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockUpstream {
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    pub fn image_url(&self) -> String {
        format!("{}/files/out-0.webp", self.base_url)
    }
}

pub fn spawn_upstream(mode: Upstream) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let received = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        mode,
        base_url: base_url.clone(),
        received: received.clone(),
    };

    let app = Router::new()
        .route("/v1/models/:owner/:name/predictions", post(create_prediction))
        .route("/v1/predictions/:id", get(get_prediction))
        .route("/files/:name", get(get_file))
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    MockUpstream {
        api_url: format!("{}/v1", base_url),
        base_url,
        received,
    }
}

fn record(state: &MockState, path: String, headers: &HeaderMap, body: Option<Value>) {
    let value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.received.lock().unwrap().push(Received {
        path,
        authorization: value("authorization"),
        prefer: value("prefer"),
        body,
    });
}

fn prediction(state: &MockState, status: &str, output: Value, error: Value) -> Value {
    json!({
        "id": "p-123",
        "model": "stability-ai/stable-diffusion-3",
        "status": status,
        "output": output,
        "error": error,
        "logs": "",
        "urls": {
            "get": format!("{}/v1/predictions/p-123", state.base_url),
            "cancel": format!("{}/v1/predictions/p-123/cancel", state.base_url),
        },
    })
}

async fn create_prediction(
    State(state): State<MockState>,
    Path((owner, name)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(
        &state,
        format!("/v1/models/{}/{}/predictions", owner, name),
        &headers,
        Some(body),
    );

    let image_url = format!("{}/files/out-0.webp", state.base_url);

    match state.mode {
        Upstream::Succeed => (
            StatusCode::CREATED,
            Json(prediction(&state, "succeeded", json!([image_url]), Value::Null)),
        ),
        Upstream::Reject => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "title": "Input validation failed",
                "detail": "- input.steps: Must be less than or equal to 28",
                "status": 422,
            })),
        ),
        Upstream::Fail => (
            StatusCode::CREATED,
            Json(prediction(
                &state,
                "failed",
                Value::Null,
                json!("NSFW content detected. Try running it again, or try a different prompt."),
            )),
        ),
        Upstream::Poll => (
            StatusCode::CREATED,
            Json(prediction(&state, "starting", Value::Null, Value::Null)),
        ),
        Upstream::Empty => (
            StatusCode::CREATED,
            Json(prediction(&state, "succeeded", json!([]), Value::Null)),
        ),
    }
}

async fn get_prediction(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Json<Value> {
    record(&state, format!("/v1/predictions/{}", id), &headers, None);

    let image_url = format!("{}/files/out-0.webp", state.base_url);
    Json(prediction(&state, "succeeded", json!([image_url]), Value::Null))
}

async fn get_file(Path(name): Path<String>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/webp")],
        format!("image-bytes:{}", name),
    )
}

pub fn test_envy(api_url: &str) -> Envy {
    Envy {
        replicate_api_token: TOKEN.to_string(),
        replicate_api_url: Some(api_url.to_string()),
        replicate_model: None,
        port: None,
        static_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/web").to_string()),
        body_limit: None,
    }
}

/// Spawns the proxy on a random port and returns its base url.
pub fn spawn_app(envy: Envy) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind app");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(vectrix_api::serve(
        listener,
        AppState::new(envy),
        std::future::pending(),
    ));

    base_url
}
