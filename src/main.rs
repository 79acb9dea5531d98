//! show-results: authenticated web front-end for per-metric analytics records.
//! Used by: binary entrypoint.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod view;

#[cfg(test)]
mod testing;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(
        auth = %config.auth_service_url,
        db = %config.db_name,
        collection = %config.collection_name,
        "starting show-results"
    );

    let state = match state::build_state(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to MongoDB");
            std::process::exit(1);
        }
    };

    server::run(state, config.bind_addr()).await?;
    Ok(())
}
