//! Liveness handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    stores_in_db: i64,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Shopping Helper backend is running!",
    })
}

/// Liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let mut session = state.db.session().await?;
    let stores_in_db = session.count_stores().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        stores_in_db,
    }))
}
