use std::{future::Future, net::TcpListener, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::post,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::{env::Envy, models::app_error::AppError};

pub mod app;
pub mod form;
pub mod images;
pub mod web;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            envy: Arc::new(envy),
            client: reqwest::Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    let static_files = web::service::static_files(state.envy.static_dir());
    let body_limit = state.envy.body_limit();

    Router::new()
        .route("/generate-image", post(images::controller::generate_image))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Serves the app on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);

    let server = axum::Server::from_tcp(listener)
        .map_err(|e| AppError::new(format!("failed to use listener: {}", e)))?;

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::new(format!("server error: {}", e)))
}
