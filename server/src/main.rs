mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{CliArgs, ServerConfig};
use crate::services::category::CategoryStore;
use crate::services::memory_store::MemoryCategoryStore;
use crate::services::pg_store::PgCategoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = ServerConfig::load(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store: Arc<dyn CategoryStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "postgres store ready");
            Arc::new(PgCategoryStore::new(pool))
        }
        None => {
            tracing::warn!("no database configured; using in-process store (data is lost on exit)");
            Arc::new(MemoryCategoryStore::new())
        }
    };

    let state = state::AppState::new(store);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "flashcards listening");
    axum::serve(listener, app).await?;
    Ok(())
}
