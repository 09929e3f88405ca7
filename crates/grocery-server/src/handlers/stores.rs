//! Store handlers

use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use grocery_types::{Entity, Store, StoreCreate, StoreUpdate};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<StoreCreate>,
) -> Result<(StatusCode, Json<Store>), ApiError> {
    let mut session = state.db.session().await?;
    let store = session.create_store(&req).await?;

    info!("Created store {} ({})", store.id, store.name);
    Ok((StatusCode::CREATED, Json(store)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Store>>, ApiError> {
    let mut session = state.db.session().await?;
    let stores = session.list_stores().await?;

    Ok(Json(stores))
}

pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Store>, ApiError> {
    let mut session = state.db.session().await?;

    match session.get_store(id).await? {
        Some(store) => Ok(Json(store)),
        None => Err(ApiError::NotFound(Entity::Store)),
    }
}

pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(update): AppJson<StoreUpdate>,
) -> Result<Json<Store>, ApiError> {
    let mut session = state.db.session().await?;

    match session.update_store(id, update).await? {
        Some(store) => {
            info!("Updated store {}", id);
            Ok(Json(store))
        }
        None => Err(ApiError::NotFound(Entity::Store)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.db.session().await?;

    if !session.delete_store(id).await? {
        return Err(ApiError::NotFound(Entity::Store));
    }

    info!("Deleted store {}", id);
    Ok(StatusCode::NO_CONTENT)
}
