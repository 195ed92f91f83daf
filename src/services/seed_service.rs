use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activity_repo, camper_repo, signup_repo};
use crate::error::StoreResult;
use crate::services::{activity_service, camper_service, signup_service};

const DEMO_CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 11),
    ("Ashley", 12),
    ("Joshua", 13),
    ("Dylan", 15),
    ("Tanya", 16),
    ("Kevin", 18),
];

const DEMO_ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Canoeing", 4),
    ("Hiking", 1),
    ("Rock Climbing", 5),
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub cleared: u64,
    pub campers: usize,
    pub activities: usize,
    pub signups: usize,
}

/// Fills the database with a fixed set of demo records. Inserts go through the
/// regular store operations so the demo data obeys the same rules as API writes.
pub async fn seed_demo_data(pool: &SqlitePool, reset: bool) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    if reset {
        let mut tx = pool.begin().await?;
        report.cleared += signup_repo::delete_all_signups(&mut *tx).await?;
        report.cleared += camper_repo::delete_all_campers(&mut *tx).await?;
        report.cleared += activity_repo::delete_all_activities(&mut *tx).await?;
        tx.commit().await?;
    }

    let mut camper_ids = Vec::with_capacity(DEMO_CAMPERS.len());
    for &(name, age) in DEMO_CAMPERS {
        let camper = camper_service::create_camper(pool, Some(name), Some(age)).await?;
        camper_ids.push(camper.id);
    }
    report.campers = camper_ids.len();

    let mut activity_ids = Vec::with_capacity(DEMO_ACTIVITIES.len());
    for &(name, difficulty) in DEMO_ACTIVITIES {
        let activity =
            activity_service::create_activity(pool, Some(name), Some(difficulty)).await?;
        activity_ids.push(activity.id);
    }
    report.activities = activity_ids.len();

    // Every camper gets two activities, spread over the day.
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset * 2) % activity_ids.len()];
            let hour = ((9 + i * 2 + offset * 5) % 24) as i64;
            signup_service::create_signup(pool, Some(hour), Some(*camper_id), Some(activity_id))
                .await?;
            report.signups += 1;
        }
    }

    info!(
        cleared = report.cleared,
        campers = report.campers,
        activities = report.activities,
        signups = report.signups,
        "demo data seeded"
    );
    Ok(report)
}
