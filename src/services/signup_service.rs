use sqlx::SqlitePool;
use tracing::info;

use crate::database::signup_repo::{self, NewSignup};
use crate::error::{StoreError, StoreResult};
use crate::models::SignupRow;
use crate::services::validation;

/// Camper and activity existence is left to the foreign keys; a dangling id
/// comes back as `StoreError::Constraint`.
pub async fn create_signup(
    pool: &SqlitePool,
    time: Option<i64>,
    camper_id: Option<i64>,
    activity_id: Option<i64>,
) -> StoreResult<SignupRow> {
    let time = validation::validate_signup(time)?;
    let camper_id = validation::require("camper_id", camper_id)?;
    let activity_id = validation::require("activity_id", activity_id)?;

    let signup = signup_repo::insert_signup(
        pool,
        NewSignup {
            time,
            camper_id,
            activity_id,
        },
    )
    .await?;
    info!(signup_id = signup.id, camper_id, activity_id, "signup created");
    Ok(signup)
}

pub async fn get_signup(pool: &SqlitePool, signup_id: i64) -> StoreResult<SignupRow> {
    signup_repo::load_signup_by_id(pool, signup_id)
        .await?
        .ok_or(StoreError::NotFound("Signup"))
}
