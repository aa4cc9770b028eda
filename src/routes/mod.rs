use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::providers::GenerativeModel,
};

pub mod recommendations;

/// Plaintext body of `GET /`
pub const WELCOME_MESSAGE: &str =
    "ブックソムリエAIのバックエンドへようこそ。サーバーは正常に稼働中です";

/// Shared application state
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/recommendations", post(recommendations::recommend))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// Liveness message
async fn index() -> &'static str {
    WELCOME_MESSAGE
}
