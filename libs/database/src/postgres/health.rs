use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Run `SELECT 1` against the pool.
///
/// Used by the readiness probe; any driver error becomes
/// [`DatabaseError::HealthCheckFailed`].
pub async fn check_health<C: ConnectionTrait>(db: &C) -> DatabaseResult<()> {
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

/// [`check_health`] plus the round-trip time, for logging slow probes.
pub async fn check_health_timed(db: &DatabaseConnection) -> (DatabaseResult<()>, Duration) {
    let start = Instant::now();
    let result = check_health(db).await;
    (result, start.elapsed())
}
