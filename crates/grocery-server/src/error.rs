//! HTTP error mapping
//!
//! Every failure leaves a handler as a status code plus a JSON body of the
//! form `{"detail": "..."}`.

use crate::storage::StorageError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use grocery_types::Entity;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(StorageError::MissingReference { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Storage(StorageError::StillReferenced { .. }) => StatusCode::CONFLICT,
            ApiError::Storage(e) if e.is_foreign_key_violation() => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else if matches!(self, ApiError::Storage(StorageError::Sqlx(_))) {
            "Foreign key constraint failed".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
