use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CamperRow {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
}
