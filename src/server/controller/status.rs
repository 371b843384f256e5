use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::status::{HealthDto, StatusDto},
    server::{error::AppError, state::AppState},
};

/// GET /api/status - Get the latest recorded dashboard snapshot
///
/// Reports the member counts of the most recent snapshot in the fine-grained log.
/// Before the first dashboard cycle has recorded anything, or when the history could
/// not be loaded, the offline placeholder is returned instead.
///
/// # Returns
/// - `200 OK`: JSON StatusDto with status "online", or the "offline" placeholder
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tracker = state.tracker.lock().await;

    let status = match tracker.latest_snapshot() {
        Some(snapshot) => StatusDto {
            status: "online".to_string(),
            total_members: snapshot.total_members,
            online_members: snapshot.online_members,
            last_update: Some(snapshot.timestamp),
            guild_id: Some(snapshot.guild_id),
        },
        None => StatusDto::offline(),
    };

    Ok((StatusCode::OK, Json(status)))
}

/// GET /api/health - Liveness probe
///
/// # Returns
/// - `200 OK`: JSON HealthDto with status "healthy" and the current time
pub async fn get_health() -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }),
    ))
}
