use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_member, get_member, list_members};

/// 会員管理の全エンドポイントを持つAPIルーターを作成する
///
/// Command endpoints (Write operations):
/// - POST /members - 会員を登録
///
/// Query endpoints (Read operations):
/// - GET /members - 会員一覧
/// - GET /members/:id - 会員詳細
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command / Query endpoints
        .route("/members", post(create_member).get(list_members))
        // Query endpoints
        .route("/members/:id", get(get_member))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
