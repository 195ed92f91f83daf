use axum::Json;
use serde_json::Value;

pub async fn home_handler() -> Json<Value> {
    Json(serde_json::json!({ "camping_world": "welcome" }))
}
