use sqlx::SqlitePool;
use tracing::info;

use crate::database::camper_repo;
use crate::error::{StoreError, StoreResult};
use crate::models::{CamperDetail, CamperRow};
use crate::services::validation;

pub async fn create_camper(
    pool: &SqlitePool,
    name: Option<&str>,
    age: Option<i64>,
) -> StoreResult<CamperRow> {
    let (name, age) = validation::validate_camper(name, age)?;
    let camper = camper_repo::insert_camper(pool, name, age).await?;
    info!(camper_id = camper.id, "camper created");
    Ok(camper)
}

pub async fn list_campers(pool: &SqlitePool) -> StoreResult<Vec<CamperRow>> {
    Ok(camper_repo::list_campers(pool).await?)
}

pub async fn get_camper(pool: &SqlitePool, camper_id: i64) -> StoreResult<CamperDetail> {
    let Some(camper) = camper_repo::load_camper_by_id(pool, camper_id).await? else {
        return Err(StoreError::NotFound("Camper"));
    };
    let activities = camper_repo::list_camper_activities(pool, camper_id).await?;
    Ok(CamperDetail { camper, activities })
}
