//! Price handlers

use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use grocery_types::{Entity, Price, PriceCreate, PriceUpdate};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<PriceCreate>,
) -> Result<(StatusCode, Json<Price>), ApiError> {
    let mut session = state.db.session().await?;
    let price = session.create_price(&req).await?;

    info!(
        "Recorded price {}: product {} at store {} = {}",
        price.id, price.product_id, price.store_id, price.price
    );
    Ok((StatusCode::CREATED, Json(price)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Price>>, ApiError> {
    let mut session = state.db.session().await?;

    Ok(Json(session.list_prices().await?))
}

pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Price>, ApiError> {
    let mut session = state.db.session().await?;

    session
        .get_price(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(Entity::Price))
}

pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(update): AppJson<PriceUpdate>,
) -> Result<Json<Price>, ApiError> {
    let mut session = state.db.session().await?;

    let price = session
        .update_price(id, update)
        .await?
        .ok_or(ApiError::NotFound(Entity::Price))?;

    info!("Updated price {}", id);
    Ok(Json(price))
}

pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.db.session().await?;

    if !session.delete_price(id).await? {
        return Err(ApiError::NotFound(Entity::Price));
    }

    info!("Deleted price {}", id);
    Ok(StatusCode::NO_CONTENT)
}
