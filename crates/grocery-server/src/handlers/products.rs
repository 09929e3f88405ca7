//! Product handlers

use crate::error::ApiError;
use crate::extractors::{AppJson, AppPath};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use grocery_types::{Entity, Product, ProductCreate, ProductUpdate};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let mut session = state.db.session().await?;
    let product = session.create_product(&req).await?;

    info!(
        "Created product {} ({}, {})",
        product.id, product.name, product.category
    );
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let mut session = state.db.session().await?;

    Ok(Json(session.list_products().await?))
}

pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Product>, ApiError> {
    let mut session = state.db.session().await?;

    session
        .get_product(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(Entity::Product))
}

pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(update): AppJson<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let mut session = state.db.session().await?;

    let product = session
        .update_product(id, update)
        .await?
        .ok_or(ApiError::NotFound(Entity::Product))?;

    info!("Updated product {}", id);
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.db.session().await?;

    if !session.delete_product(id).await? {
        return Err(ApiError::NotFound(Entity::Product));
    }

    info!("Deleted product {}", id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_create_and_get() {
        let app = test_app().await;
        let (status, created) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"name": "Milk", "category": "Dairy", "unit": "L", "size": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_i64().unwrap() > 0);
        assert_eq!(created["brand"], json!(null));

        let (status, body) =
            send(&app, Method::GET, &format!("/products/{}", created["id"]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_create_requires_category() {
        let app = test_app().await;
        let (status, body) =
            send(&app, Method::POST, "/products", Some(json!({"name": "Milk"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("missing field `category`"));

        let (_, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_brand_patch_keeps_other_fields() {
        let app = test_app().await;
        let (_, created) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({"name": "Milk", "category": "Dairy", "unit": "L", "size": 1.0})),
        )
        .await;
        let uri = format!("/products/{}", created["id"]);

        let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"brand": "Acme"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": created["id"],
                "name": "Milk",
                "category": "Dairy",
                "brand": "Acme",
                "unit": "L",
                "size": 1.0
            })
        );
    }

    #[tokio::test]
    async fn test_list_matches_live_records() {
        let app = test_app().await;
        let mut ids = HashSet::new();
        for name in ["Milk", "Bread", "Eggs", "Butter"] {
            let (_, body) = send(
                &app,
                Method::POST,
                "/products",
                Some(json!({"name": name, "category": "Basics"})),
            )
            .await;
            assert!(ids.insert(body["id"].as_i64().unwrap()));
        }

        let removed = *ids.iter().next().unwrap();
        let (status, _) =
            send(&app, Method::DELETE, &format!("/products/{}", removed), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        ids.remove(&removed);

        let (_, body) = send(&app, Method::GET, "/products", None).await;
        let listed: HashSet<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_missing_product() {
        let app = test_app().await;

        let (status, body) = send(&app, Method::GET, "/products/12", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Product not found"}));

        let (status, _) =
            send(&app, Method::PUT, "/products/12", Some(json!({"brand": "Acme"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
