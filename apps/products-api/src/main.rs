//! Products API - REST server over PostgreSQL

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL"
    );
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = create_router::<openapi::ApiDoc>(
        api::root_routes(&state),
        api::routes(&state),
        &state.config.server,
    )?;

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    let db = state.db.clone();
    create_production_app(router, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        match db.close().await {
            Ok(()) => info!("PostgreSQL pool closed"),
            Err(e) => warn!(error = %e, "Failed to close PostgreSQL pool"),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
