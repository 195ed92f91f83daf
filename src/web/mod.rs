pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use routes::{activities, campers, home, signups};

pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route(
            "/campers",
            get(campers::list_campers_handler).post(campers::create_camper_handler),
        )
        .route("/campers/:id", get(campers::camper_detail_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route("/activities/:id", delete(activities::delete_activity_handler))
        .route("/signups", post(signups::create_signup_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
