use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::SignupRow;
use crate::services::signup_service;
use crate::web::error::{bad_body, store_error, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct NewSignupBody {
    pub time: Option<i64>,
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
}

pub async fn create_signup_handler(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewSignupBody>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupRow>), ErrorResponse> {
    let Json(body) = body.map_err(bad_body)?;
    let signup = signup_service::create_signup(&pool, body.time, body.camper_id, body.activity_id)
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(signup)))
}
