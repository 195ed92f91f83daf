pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{StoreError, StoreResult, ValidationError};
pub use web::app;

/// Installs the `tracing` subscriber used by the binaries. `RUST_LOG` overrides
/// the default filter.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
