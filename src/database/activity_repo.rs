use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{ActivityRow, CamperRow};

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, difficulty)
VALUES (?1, ?2)
RETURNING id, name, difficulty
"#;

pub async fn insert_activity(
    pool: &SqlitePool,
    name: Option<&str>,
    difficulty: Option<i64>,
) -> sqlx::Result<ActivityRow> {
    sqlx::query_as::<_, ActivityRow>(SQL_INSERT_ACTIVITY)
        .bind(name)
        .bind(difficulty)
        .fetch_one(pool)
        .await
}

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, difficulty
FROM activities
ORDER BY id ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_ACTIVITY_BY_ID: &str = r#"
SELECT id, name, difficulty
FROM activities
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_activity_by_id(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_ACTIVITY_BY_ID)
        .bind(activity_id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_ACTIVITY_CAMPERS: &str = r#"
SELECT
  c.id,
  c.name,
  c.age
FROM signups s
JOIN campers c ON c.id = s.camper_id
WHERE s.activity_id = ?1
ORDER BY s.id ASC
"#;

pub async fn list_activity_campers(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_ACTIVITY_CAMPERS)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities
WHERE id = ?1
"#;

/// Runs on a connection so the caller can pair it with
/// `signup_repo::delete_signups_for_activity` inside one transaction.
pub async fn delete_activity(conn: &mut SqliteConnection, activity_id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_ALL_ACTIVITIES: &str = "DELETE FROM activities";

pub async fn delete_all_activities(conn: &mut SqliteConnection) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ALL_ACTIVITIES).execute(conn).await?;
    Ok(res.rows_affected())
}
