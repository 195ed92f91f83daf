use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::{CamperDetail, CamperRow};
use crate::services::camper_service;
use crate::web::error::{bad_body, store_error, unknown_id, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct NewCamperBody {
    pub name: Option<String>,
    pub age: Option<i64>,
}

pub async fn list_campers_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CamperRow>>, ErrorResponse> {
    camper_service::list_campers(&pool)
        .await
        .map(Json)
        .map_err(store_error)
}

pub async fn create_camper_handler(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewCamperBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperRow>), ErrorResponse> {
    let Json(body) = body.map_err(bad_body)?;
    let camper = camper_service::create_camper(&pool, body.name.as_deref(), body.age)
        .await
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(camper)))
}

pub async fn camper_detail_handler(
    camper_id: Result<Path<i64>, PathRejection>,
    State(pool): State<SqlitePool>,
) -> Result<Json<CamperDetail>, ErrorResponse> {
    let Path(camper_id) = camper_id.map_err(|e| unknown_id("Camper", e))?;
    camper_service::get_camper(&pool, camper_id)
        .await
        .map(Json)
        .map_err(store_error)
}
