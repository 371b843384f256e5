use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::status::{get_health, get_status},
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/health", get(get_health))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
