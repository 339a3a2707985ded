//! Liveness and readiness probes

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, health_router, run_health_checks};
use database::postgres::{DatabaseConnection, check_health_timed};
use std::time::Duration;

const SLOW_PROBE: Duration = Duration::from_millis(500);

async fn ready(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let (result, elapsed) = check_health_timed(&db).await;
            if elapsed > SLOW_PROBE {
                tracing::warn!(?elapsed, "Slow database readiness probe");
            }
            result.map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

/// `GET /health` (liveness) and `GET /ready` (database round-trip)
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(db)
        .merge(health_router())
}
