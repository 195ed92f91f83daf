use dotenvy::dotenv;
use tracing::{info, warn};

use camping_world::{app, database, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    camping_world::init_tracing();

    let config = AppConfig::from_env();
    info!(database_url = %config.database_url, "connecting to database");
    let pool = database::connect(&config.database_url).await?;

    let app = app(pool);

    // Retry once on the next port if the configured one is taken.
    let addr = config.socket_addr(config.port)?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.socket_addr(config.port.saturating_add(1))?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    info!(addr = %listener.local_addr()?, "camping world listening");
    axum::serve(listener, app).await?;
    Ok(())
}
