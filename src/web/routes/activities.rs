use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::models::ActivityRow;
use crate::services::activity_service;
use crate::web::error::{store_error, unknown_id, ErrorResponse};

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ActivityRow>>, ErrorResponse> {
    activity_service::list_activities(&pool)
        .await
        .map(Json)
        .map_err(store_error)
}

pub async fn delete_activity_handler(
    activity_id: Result<Path<i64>, PathRejection>,
    State(pool): State<SqlitePool>,
) -> Result<StatusCode, ErrorResponse> {
    let Path(activity_id) = activity_id.map_err(|e| unknown_id("Activity", e))?;
    activity_service::delete_activity(&pool, activity_id)
        .await
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}
