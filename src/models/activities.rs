use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}
