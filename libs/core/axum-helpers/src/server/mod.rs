//! Server infrastructure: router composition, probes and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(health_router(), api_routes, &config.server)?;
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use health::{HealthCheckFuture, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
