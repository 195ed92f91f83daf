use sqlx::{SqliteConnection, SqlitePool};

use crate::models::SignupRow;

pub struct NewSignup {
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (
  time,
  camper_id,
  activity_id
) VALUES (?1, ?2, ?3)
RETURNING id, time, camper_id, activity_id
"#;

pub async fn insert_signup(pool: &SqlitePool, signup: NewSignup) -> sqlx::Result<SignupRow> {
    sqlx::query_as::<_, SignupRow>(SQL_INSERT_SIGNUP)
        .bind(signup.time)
        .bind(signup.camper_id)
        .bind(signup.activity_id)
        .fetch_one(pool)
        .await
}

const SQL_LOAD_SIGNUP_BY_ID: &str = r#"
SELECT id, time, camper_id, activity_id
FROM signups
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_signup_by_id(
    pool: &SqlitePool,
    signup_id: i64,
) -> sqlx::Result<Option<SignupRow>> {
    sqlx::query_as::<_, SignupRow>(SQL_LOAD_SIGNUP_BY_ID)
        .bind(signup_id)
        .fetch_optional(pool)
        .await
}

const SQL_DELETE_SIGNUPS_FOR_ACTIVITY: &str = r#"
DELETE FROM signups
WHERE activity_id = ?1
"#;

pub async fn delete_signups_for_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_SIGNUPS_FOR_ACTIVITY)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_ALL_SIGNUPS: &str = "DELETE FROM signups";

pub async fn delete_all_signups(conn: &mut SqliteConnection) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ALL_SIGNUPS).execute(conn).await?;
    Ok(res.rows_affected())
}
