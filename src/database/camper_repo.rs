use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{ActivityRow, CamperRow};

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age)
VALUES (?1, ?2)
RETURNING id, name, age
"#;

pub async fn insert_camper(pool: &SqlitePool, name: &str, age: i64) -> sqlx::Result<CamperRow> {
    sqlx::query_as::<_, CamperRow>(SQL_INSERT_CAMPER)
        .bind(name)
        .bind(age)
        .fetch_one(pool)
        .await
}

const SQL_LIST_CAMPERS: &str = r#"
SELECT id, name, age
FROM campers
ORDER BY id ASC
"#;

pub async fn list_campers(pool: &SqlitePool) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_CAMPER_BY_ID: &str = r#"
SELECT id, name, age
FROM campers
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_camper_by_id(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LOAD_CAMPER_BY_ID)
        .bind(camper_id)
        .fetch_optional(pool)
        .await
}

// One row per signup, so a camper signed up twice for the same activity sees it twice.
const SQL_LIST_CAMPER_ACTIVITIES: &str = r#"
SELECT
  a.id,
  a.name,
  a.difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?1
ORDER BY s.id ASC
"#;

pub async fn list_camper_activities(
    pool: &SqlitePool,
    camper_id: i64,
) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_CAMPER_ACTIVITIES)
        .bind(camper_id)
        .fetch_all(pool)
        .await
}

const SQL_DELETE_ALL_CAMPERS: &str = "DELETE FROM campers";

pub async fn delete_all_campers(conn: &mut SqliteConnection) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ALL_CAMPERS).execute(conn).await?;
    Ok(res.rows_affected())
}
