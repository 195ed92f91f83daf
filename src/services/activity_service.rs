use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::database::{activity_repo, signup_repo};
use crate::error::{StoreError, StoreResult};
use crate::models::{ActivityDetail, ActivityRow};

// Activities carry no field rules; only campers and signups are validated.
pub async fn create_activity(
    pool: &SqlitePool,
    name: Option<&str>,
    difficulty: Option<i64>,
) -> StoreResult<ActivityRow> {
    let activity = activity_repo::insert_activity(pool, name, difficulty).await?;
    info!(activity_id = activity.id, "activity created");
    Ok(activity)
}

pub async fn list_activities(pool: &SqlitePool) -> StoreResult<Vec<ActivityRow>> {
    Ok(activity_repo::list_activities(pool).await?)
}

pub async fn get_activity(pool: &SqlitePool, activity_id: i64) -> StoreResult<ActivityDetail> {
    let Some(activity) = activity_repo::load_activity_by_id(pool, activity_id).await? else {
        return Err(StoreError::NotFound("Activity"));
    };
    let campers = activity_repo::list_activity_campers(pool, activity_id).await?;
    Ok(ActivityDetail { activity, campers })
}

/// Deletes the activity and every signup pointing at it, atomically.
pub async fn delete_activity(pool: &SqlitePool, activity_id: i64) -> StoreResult<()> {
    let mut tx = pool.begin().await?;

    let removed_signups = signup_repo::delete_signups_for_activity(&mut *tx, activity_id).await?;
    let removed = activity_repo::delete_activity(&mut *tx, activity_id).await?;
    if removed == 0 {
        // Dropping the transaction rolls back.
        return Err(StoreError::NotFound("Activity"));
    }

    tx.commit().await?;
    debug!(activity_id, removed_signups, "activity signups cascaded");
    info!(activity_id, "activity deleted");
    Ok(())
}
