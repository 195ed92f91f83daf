use dotenvy::dotenv;
use std::env;
use tracing::error;

use camping_world::services::seed_service;
use camping_world::{database, AppConfig};

#[tokio::main]
async fn main() {
    dotenv().ok();
    camping_world::init_tracing();

    let config = AppConfig::from_env();
    let pool = match database::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(database_url = %config.database_url, error = %e, "seed: cannot open database");
            std::process::exit(1);
        }
    };

    let reset = env::var("SEED_RESET")
        .map(|v| v.trim() != "0")
        .unwrap_or(true);

    // The service logs the report on success.
    if let Err(e) = seed_service::seed_demo_data(&pool, reset).await {
        error!(error = %e, "seed failed");
        std::process::exit(1);
    }
}
