//! HTTP route table

use crate::handlers;
use crate::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/stores",
            get(handlers::stores::list).post(handlers::stores::create),
        )
        .route(
            "/stores/:id",
            get(handlers::stores::get)
                .put(handlers::stores::update)
                .delete(handlers::stores::delete),
        )
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/products/:id",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::delete),
        )
        .route(
            "/prices",
            get(handlers::prices::list).post(handlers::prices::create),
        )
        .route(
            "/prices/:id",
            get(handlers::prices::get)
                .put(handlers::prices::update)
                .delete(handlers::prices::delete),
        )
        .with_state(state)
}
