//! Store errors and their HTTP mapping.
//!
//! `NotFound` and `Validation` are the two outcomes a client can cause and
//! are reported as 404 and 422. `Database` covers persistence faults; it is
//! logged and reported as a bare 500. Requests axum cannot extract (bad JSON,
//! wrong content type, non-integer id) are also 422, in the same
//! `{"detail": {"field", "message"}}` shape as a failed field check.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::ValidationError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("invalid {0}")]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Todo not found" })),
            )
                .into_response(),
            StoreError::Validation(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": err }))).into_response()
            }
            StoreError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// What a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(err) => err.into_response(),
            ApiError::Body(rejection) => unprocessable("body", rejection.body_text()),
            ApiError::Path(rejection) => unprocessable("id", rejection.body_text()),
        }
    }
}

fn unprocessable(field: &str, message: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": { "field": field, "message": message } })),
    )
        .into_response()
}
