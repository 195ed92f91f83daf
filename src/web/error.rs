use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::warn;

use crate::error::StoreError;

pub type ErrorResponse = (StatusCode, Json<Value>);

pub fn status_for(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        // Every failed write is the caller's problem as far as the API is concerned.
        StoreError::Validation(_) | StoreError::Constraint(_) | StoreError::Database(_) => {
            StatusCode::BAD_REQUEST
        }
    }
}

pub fn store_error(err: StoreError) -> ErrorResponse {
    let status = status_for(&err);
    warn!(status = %status, error = %err, "request failed");
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

pub fn bad_body(rejection: JsonRejection) -> ErrorResponse {
    warn!(error = %rejection.body_text(), "rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": rejection.body_text() })),
    )
}

/// An id segment that is not an integer can never name a row, so it is
/// reported like any other missing `entity`.
pub fn unknown_id(entity: &'static str, rejection: PathRejection) -> ErrorResponse {
    warn!(entity, error = %rejection.body_text(), "unparsable id in path");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": StoreError::NotFound(entity).to_string() })),
    )
}
